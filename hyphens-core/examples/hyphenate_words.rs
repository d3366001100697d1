//! Basic usage of the hyphenation engine

use hyphens_core::{get_hyphenator, Hyphenator, SOFT_HYPHEN};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Compile patterns by hand
    println!("=== Method 1: Hand-written Patterns ===");
    let hyphenator = Hyphenator::compile("hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n", "ta-ble");
    println!("hyphenation -> {:?}", hyphenator.hyphenate("hyphenation"));
    println!("table       -> {:?}", hyphenator.hyphenate("table"));

    // Method 2: Embedded language data
    println!("\n=== Method 2: Built-in Languages ===");
    for code in ["en", "ru", "af"] {
        let hyphenator = get_hyphenator(code)?;
        for word in ["hyphenation", "программирование", "rekenaar"] {
            println!("[{code}] {word} -> {}", hyphenator.hyphenate(word).join("-"));
        }
    }

    // Method 3: Soft hyphens for a renderer
    println!("\n=== Method 3: Running Text ===");
    let merged = get_hyphenator("en+ru")?;
    let text = "Hyphenation helps justified text. Программирование тоже.";
    let soft = merged.hyphenate_text(text, &SOFT_HYPHEN.to_string());
    println!("{}", soft.replace(SOFT_HYPHEN, "\u{00B7}"));

    Ok(())
}
