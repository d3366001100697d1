//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;

use crate::error::CliError;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Output one hyphenated word
    fn format_word(&mut self, word: &str, fragments: &[&str]) -> Result<()>;

    /// Output one hyphenated document
    fn format_document(&mut self, source: &str, text: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Hyphenated text as-is, one word per line for single words
    Text,
    /// JSON with fragments and break offsets
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{name}'")).into()
        })
    }

    /// Short description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Hyphenated text, one word per line for the word command",
            OutputFormat::Json => "JSON with fragments and byte break offsets",
            OutputFormat::Markdown => "Numbered word list or one section per document",
        }
    }

    /// Build a formatter writing to `writer`
    pub fn formatter(
        &self,
        writer: Box<dyn Write + Send + Sync>,
        separator: &str,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, separator)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, separator)),
        }
    }
}

/// Byte offsets where consecutive fragments meet
pub(crate) fn break_offsets(fragments: &[&str]) -> Vec<usize> {
    fragments
        .iter()
        .take(fragments.len().saturating_sub(1))
        .scan(0, |offset, fragment| {
            *offset += fragment.len();
            Some(*offset)
        })
        .collect()
}
