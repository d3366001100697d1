//! JSON output formatter

use super::{break_offsets, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects everything and writes one object on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    output: JsonOutput,
}

/// Top-level JSON document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JsonOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<WordData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentData>,
}

/// One hyphenated word
#[derive(Debug, Serialize, Deserialize)]
pub struct WordData {
    /// The input word
    pub word: String,
    /// Fragments in order; they concatenate to `word`
    pub fragments: Vec<String>,
    /// Byte offsets of the breaks inside `word`
    pub breaks: Vec<usize>,
}

/// One hyphenated document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Path of the input file
    pub source: String,
    /// Text with separators inserted
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            output: JsonOutput::default(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, word: &str, fragments: &[&str]) -> Result<()> {
        self.output.words.push(WordData {
            word: word.to_string(),
            fragments: fragments.iter().map(|f| f.to_string()).collect(),
            breaks: break_offsets(fragments),
        });
        Ok(())
    }

    fn format_document(&mut self, source: &str, text: &str) -> Result<()> {
        self.output.documents.push(DocumentData {
            source: source.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.output)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.output)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(pretty: bool, build: impl FnOnce(&mut JsonFormatter<&mut Vec<u8>>)) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, pretty);
            build(&mut formatter);
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_words_with_breaks() {
        let json = render(false, |formatter| {
            formatter
                .format_word("hyphenation", &["hy", "phen", "ation"])
                .unwrap();
        });
        assert_eq!(
            json,
            "{\"words\":[{\"word\":\"hyphenation\",\"fragments\":[\"hy\",\"phen\",\"ation\"],\"breaks\":[2,6]}]}\n"
        );
    }

    #[test]
    fn test_documents_round_trip() {
        let json = render(true, |formatter| {
            formatter.format_document("a.txt", "Про-грам-ма\n").unwrap();
        });

        let parsed: JsonOutput = serde_json::from_str(&json).unwrap();
        assert!(parsed.words.is_empty());
        assert_eq!(parsed.documents.len(), 1);
        assert_eq!(parsed.documents[0].source, "a.txt");
        assert_eq!(parsed.documents[0].text, "Про-грам-ма\n");
    }
}
