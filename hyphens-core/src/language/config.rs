//! Configuration structures and validation
//!
//! This module defines the TOML schema for language pattern data.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub patterns: Vec<PatternSet>,
    #[serde(default)]
    pub exceptions: Exceptions,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    /// Other codes that select this language
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// One named block of pattern tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSet {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Whitespace-separated tokens such as `hy3ph` or `.ach4`
    pub text: String,
}

/// Hyphenated exception words
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exceptions {
    #[serde(default)]
    pub text: String,
}

impl LanguageConfig {
    /// Parse and validate a configuration from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading language config from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "language code must not be empty".to_string(),
            ));
        }

        if self.patterns.is_empty() {
            return Err(Error::InvalidConfig(
                "no pattern blocks defined".to_string(),
            ));
        }

        if let Some(set) = self
            .patterns
            .iter()
            .find(|set| set.text.split_whitespace().next().is_none())
        {
            return Err(Error::InvalidConfig(format!(
                "pattern block '{}' contains no patterns",
                set.name
            )));
        }

        Ok(())
    }

    /// Total number of pattern tokens over all blocks
    pub fn pattern_count(&self) -> usize {
        self.patterns
            .iter()
            .map(|set| set.text.split_whitespace().count())
            .sum()
    }

    /// Number of exception tokens
    pub fn exception_count(&self) -> usize {
        self.exceptions.text.split_whitespace().count()
    }
}
