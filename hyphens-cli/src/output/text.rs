//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - writes hyphenated text unchanged
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, separator: &str) -> Self {
        Self {
            writer,
            separator: separator.to_string(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, _word: &str, fragments: &[&str]) -> Result<()> {
        writeln!(self.writer, "{}", fragments.join(&self.separator))?;
        Ok(())
    }

    fn format_document(&mut self, _source: &str, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_one_per_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, "-");
            formatter.format_word("hyphenation", &["hy", "phen", "ation"]).unwrap();
            formatter.format_word("word", &["word"]).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "hy-phen-ation\nword\n");
    }

    #[test]
    fn test_documents_are_written_verbatim() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, "-");
            formatter.format_document("a.txt", "Hy-phen-ation\n").unwrap();
            formatter.format_document("b.txt", "ta-ble").unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "Hy-phen-ation\nta-ble");
    }
}
