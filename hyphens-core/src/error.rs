//! Error types for loading pattern data
//!
//! Hyphenation itself never fails. Errors only arise while reading and
//! validating language configurations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the configuration and language registry layer
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read
    #[error("failed to read language config {}: {source}", path.display())]
    Io {
        /// Path that failed to load
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or does not match the schema
    #[error("failed to parse language config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but its contents are unusable
    #[error("invalid language config: {0}")]
    InvalidConfig(String),

    /// No built-in language matches the requested code
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_display() {
        let error = Error::UnknownLanguage("xx".to_string());
        assert_eq!(error.to_string(), "unknown language code: xx");
    }

    #[test]
    fn test_invalid_config_display() {
        let error = Error::InvalidConfig("no pattern blocks defined".to_string());
        assert_eq!(
            error.to_string(),
            "invalid language config: no pattern blocks defined"
        );
    }

    #[test]
    fn test_io_error_mentions_path() {
        let error = Error::Io {
            path: PathBuf::from("/nonexistent/lang.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let message = error.to_string();
        assert!(message.contains("/nonexistent/lang.toml"));
        assert!(message.contains("missing"));
    }
}
