//! Generate config command implementation

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use crate::error::CliResult;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Replace the sample patterns with real ones for your language");
        println!("2. Validate your configuration:");
        println!(
            "   hyphens validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for processing:");
        println!(
            "   hyphens process -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Hyphenation patterns for {code}

[metadata]
code = "{code}"
name = "Custom Language"

# Liang patterns: letters with digit weights between them.
# An odd weight allows a break at that gap, an even weight forbids it.
# '.' anchors a pattern to the start or end of a word.
# Several [[patterns]] blocks may be given; later blocks win when two
# blocks define the same letters.
[[patterns]]
name = "base"
description = "Sample patterns that hyphenate 'hyphenation' as hy-phen-ation"
text = '''
hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n
'''

# Words hyphenated by hand; '-' marks every allowed break.
# A word without '-' is never broken.
[exceptions]
text = '''
ta-ble
project
'''
"#,
            code = self.language_code
        )
    }
}
