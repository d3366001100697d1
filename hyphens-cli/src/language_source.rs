//! Language source management for CLI

use anyhow::{Context, Result};
use clap::Args;
use hyphens_core::{get_hyphenator, Hyphenator, LanguageConfig};
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line options that pick the pattern data
#[derive(Debug, Clone, Default, Args)]
pub struct LanguageArgs {
    /// Built-in language code; join several with '+', e.g. en+ru
    #[arg(short, long, value_name = "CODE", conflicts_with = "language_config")]
    pub language: Option<String>,

    /// External TOML language configuration
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,
}

impl LanguageArgs {
    /// Resolve the source, using `default_code` when nothing was given
    pub fn source(&self, default_code: &str) -> LanguageSource {
        match (&self.language_config, &self.language) {
            (Some(path), _) => LanguageSource::External { path: path.clone() },
            (None, Some(code)) => LanguageSource::BuiltIn(code.clone()),
            (None, None) => LanguageSource::BuiltIn(default_code.to_string()),
        }
    }
}

/// Source of hyphenation patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Embedded language data, by code
    BuiltIn(String),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {code}"),
            LanguageSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Compile or fetch the hyphenator for this source
    pub fn load(&self) -> Result<Arc<Hyphenator>> {
        let hyphenator = match self {
            LanguageSource::BuiltIn(code) => get_hyphenator(code)
                .with_context(|| format!("Failed to load language '{code}'"))?,
            LanguageSource::External { path } => {
                let config = LanguageConfig::from_file(path).with_context(|| {
                    format!("Failed to load language config: {}", path.display())
                })?;
                Arc::new(Hyphenator::from_config(&config)?)
            }
        };

        log::info!("Using {}", self.display_name());
        Ok(hyphenator)
    }
}
