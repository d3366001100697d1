//! Validate command implementation

use clap::Args;
use hyphens_core::{Hyphenator, LanguageConfig};
use std::path::PathBuf;

use crate::error::CliResult;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        let loaded = LanguageConfig::from_file(&self.language_config).and_then(|config| {
            let hyphenator = Hyphenator::from_config(&config)?;
            Ok((config, hyphenator))
        });

        match loaded {
            Ok((config, hyphenator)) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", config.metadata.code);
                println!("  Language name: {}", config.metadata.name);
                for set in &config.patterns {
                    println!(
                        "  Pattern block '{}': {} tokens",
                        set.name,
                        set.text.split_whitespace().count()
                    );
                }
                println!(
                    "  Compiled patterns: {} ({} trie nodes)",
                    hyphenator.trie().len(),
                    hyphenator.trie().node_count()
                );
                println!("  Exceptions: {}", hyphenator.exceptions().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
