//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - numbered word list or one section per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    separator: String,
    word_count: usize,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, separator: &str) -> Self {
        Self {
            writer,
            separator: separator.to_string(),
            word_count: 0,
            document_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, word: &str, fragments: &[&str]) -> Result<()> {
        self.word_count += 1;
        writeln!(
            self.writer,
            "{}. **{}**: {}",
            self.word_count,
            word,
            fragments.join(&self.separator)
        )?;
        Ok(())
    }

    fn format_document(&mut self, source: &str, text: &str) -> Result<()> {
        self.document_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", text.trim_end())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        if self.word_count > 0 {
            writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        }
        if self.document_count > 0 {
            writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
