//! Word command implementation

use clap::Args;
use hyphens_core::{segments, Hyphenator, Segment};
use std::io::{self, BufWriter};

use crate::error::CliResult;
use crate::language_source::LanguageArgs;
use crate::output::{OutputFormat, OutputFormatter};

/// Language used when neither `-l` nor `--language-config` is given
const DEFAULT_WORD_LANGUAGE: &str = "en+ru";

/// Arguments for the word command
#[derive(Debug, Args)]
pub struct WordArgs {
    /// Words to hyphenate
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Text shown at each break
    #[arg(short, long, value_name = "SEP", default_value = "-")]
    pub separator: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl WordArgs {
    /// Execute the word command
    pub fn execute(&self) -> CliResult<()> {
        super::init_logging(self.verbose, false);

        let hyphenator = self.language.source(DEFAULT_WORD_LANGUAGE).load()?;
        let writer = Box::new(BufWriter::new(io::stdout()));
        let mut formatter = self.format.formatter(writer, &self.separator, true);

        self.write_words(&hyphenator, formatter.as_mut())?;
        formatter.finish()
    }

    /// Send every word through `formatter`
    pub fn write_words(
        &self,
        hyphenator: &Hyphenator,
        formatter: &mut dyn OutputFormatter,
    ) -> CliResult<()> {
        for word in &self.words {
            let fragments = split_argument(hyphenator, word);
            log::debug!("{word}: {} fragment(s)", fragments.len());
            formatter.format_word(word, &fragments)?;
        }
        Ok(())
    }
}

/// Split one command-line argument the way running text is split.
///
/// The argument is segmented first, so punctuation and digits are kept
/// in place and every word inside it is hyphenated on its own.
fn split_argument<'a>(hyphenator: &Hyphenator, argument: &'a str) -> Vec<&'a str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for segment in segments(argument) {
        if let Segment::Word(word) = segment {
            for cut in hyphenator.break_points(word) {
                fragments.push(&argument[start..offset + cut]);
                start = offset + cut;
            }
        }
        offset += segment.as_str().len();
    }

    fragments.push(&argument[start..]);
    fragments
}
