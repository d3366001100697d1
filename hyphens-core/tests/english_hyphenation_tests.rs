//! Integration tests for the embedded English patterns

use hyphens_core::{get_hyphenator, Hyphenator, SOFT_HYPHEN};

fn english() -> std::sync::Arc<Hyphenator> {
    get_hyphenator("en").unwrap()
}

#[test]
fn test_common_words() {
    let hyphenator = english();

    let cases: &[(&str, &[&str])] = &[
        ("hyphenation", &["hy", "phen", "ation"]),
        ("computer", &["com", "put", "er"]),
        ("algorithm", &["al", "go", "rithm"]),
        ("programming", &["pro", "gram", "ming"]),
        ("dictionary", &["dic", "tio", "nary"]),
        ("information", &["in", "for", "ma", "tion"]),
        ("international", &["in", "ter", "na", "tion", "al"]),
        ("typography", &["ty", "pog", "ra", "phy"]),
        ("independence", &["in", "de", "pen", "dence"]),
        ("extraordinary", &["ex", "tra", "or", "di", "nary"]),
        ("university", &["uni", "ver", "si", "ty"]),
        ("hyphenated", &["hy", "phen", "at", "ed"]),
    ];

    for (word, expected) in cases {
        assert_eq!(
            hyphenator.hyphenate(word),
            expected.to_vec(),
            "unexpected fragments for {word}"
        );
    }
}

#[test]
fn test_long_word() {
    assert_eq!(
        english().hyphenate("supercalifragilisticexpialidocious"),
        vec![
            "su", "per", "cal", "ifrag", "ilis", "tic", "ex", "pi", "ali", "do", "cious"
        ]
    );
}

#[test]
fn test_unbreakable_words() {
    let hyphenator = english();
    for word in ["word", "wordy", "rhythm", "strength", "eight", "presents"] {
        assert_eq!(hyphenator.hyphenate(word), vec![word]);
    }
}

#[test]
fn test_short_words_stay_whole() {
    let hyphenator = english();
    for word in ["", "a", "an", "the", "ion"] {
        assert_eq!(hyphenator.hyphenate(word), vec![word]);
        assert!(hyphenator.break_points(word).is_empty());
    }
}

#[test]
fn test_exceptions_override_patterns() {
    let hyphenator = english();

    // The exception list spells these without any break
    assert_eq!(hyphenator.hyphenate("project"), vec!["project"]);
    assert_eq!(hyphenator.hyphenate("Projects"), vec!["Projects"]);

    assert_eq!(hyphenator.hyphenate("table"), vec!["ta", "ble"]);
    assert_eq!(hyphenator.hyphenate("associate"), vec!["as", "so", "ciate"]);
    assert_eq!(hyphenator.hyphenate("associates"), vec!["as", "so", "ciates"]);
    assert_eq!(
        hyphenator.hyphenate("recognizance"),
        vec!["re", "cog", "ni", "zance"]
    );
}

#[test]
fn test_case_is_preserved() {
    let hyphenator = english();
    assert_eq!(hyphenator.hyphenate("Table"), vec!["Ta", "ble"]);
    assert_eq!(
        hyphenator.hyphenate("HYPHENATION"),
        vec!["HY", "PHEN", "ATION"]
    );
    assert_eq!(
        hyphenator.hyphenate("Associate"),
        vec!["As", "so", "ciate"]
    );
}

#[test]
fn test_existing_hyphens_are_not_doubled() {
    let hyphenator = english();
    assert_eq!(
        hyphenator.hyphenate("co-operation"),
        vec!["co-op", "er", "a", "tion"]
    );
    assert_eq!(hyphenator.hyphenate("well-known"), vec!["well-known"]);
}

#[test]
fn test_break_points_are_byte_offsets() {
    let hyphenator = english();
    assert_eq!(hyphenator.break_points("hyphenation"), vec![2, 6]);
    assert_eq!(hyphenator.break_points("table"), vec![2]);
}

#[test]
fn test_hyphenate_text_preserves_punctuation() {
    let hyphenator = english();
    assert_eq!(
        hyphenator.hyphenate_text("Hyphenation, of course, is tricky!", "-"),
        "Hy-phen-ation, of course, is tricky!"
    );
    assert_eq!(
        hyphenator.hyphenate_text("Supercalifragilisticexpialidocious!", "|"),
        "Su|per|cal|ifrag|ilis|tic|ex|pi|ali|do|cious!"
    );
}

#[test]
fn test_hyphenate_text_with_nothing_to_break() {
    let sentence = "The quick brown fox jumps over the lazy dog.";
    assert_eq!(english().hyphenate_text(sentence, "-"), sentence);
    assert_eq!(english().hyphenate_text("", "-"), "");
}

#[test]
fn test_hyphenate_text_sentence() {
    assert_eq!(
        english().hyphenate_text(
            "The international university published a dictionary.",
            "-"
        ),
        "The in-ter-na-tion-al uni-ver-si-ty pub-lished a dic-tio-nary."
    );
}

#[test]
fn test_hyphenate_text_treats_urls_as_words() {
    let hyphenator = english();
    assert_eq!(
        hyphenator.hyphenate_text("example.com/test/page.html", "-"),
        "ex-am-ple.-com/test/-page.html"
    );

    let soft = SOFT_HYPHEN.to_string();
    assert_eq!(
        hyphenator.hyphenate_text("Visit example.com/test/page.html today.", &soft),
        "Vis\u{ad}it ex\u{ad}am\u{ad}ple.\u{ad}com/test/\u{ad}page.html to\u{ad}day."
    );
}

#[test]
fn test_batch_matches_single_calls() {
    let hyphenator = english();
    let texts = vec![
        "Hyphenation, of course, is tricky!".to_string(),
        String::new(),
        "programming computer".to_string(),
    ];

    let batch = hyphenator.hyphenate_batch(&texts, "-");
    let single: Vec<String> = texts
        .iter()
        .map(|text| hyphenator.hyphenate_text(text, "-"))
        .collect();

    assert_eq!(batch, single);
    assert_eq!(batch[2], "pro-gram-ming com-put-er");
}
