//! Process command implementation

use anyhow::Context;
use clap::Args;
use hyphens_core::Hyphenator;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageArgs;
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Text inserted at each break (default: soft hyphen U+00AD)
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads; implies --parallel
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// A hyphenated input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Where the text came from
    pub source: PathBuf,
    /// Text with separators inserted
    pub text: String,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> CliResult<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let worker_threads = self.worker_threads(&config)?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format)?,
        };
        let separator = self
            .separator
            .clone()
            .unwrap_or_else(|| config.processing.separator.clone());

        let hyphenator = self
            .language
            .source(&config.processing.default_language)
            .load()?;

        let files = resolve_patterns(&self.input)?;
        log::info!(
            "Processing {} file(s), {} bytes",
            files.len(),
            FileReader::total_size(&files)?
        );

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);
        let documents = hyphenate_files(&hyphenator, &files, &separator, worker_threads, &progress)?;
        progress.finish();

        let writer = self.open_output()?;
        let mut formatter = format.formatter(writer, &separator, config.output.pretty_json);
        for document in &documents {
            formatter.format_document(&document.source.display().to_string(), &document.text)?;
        }
        formatter.finish()?;

        log::info!("Processing completed");
        Ok(())
    }

    /// Thread count for the worker pool, or `None` for sequential processing
    fn worker_threads(&self, config: &CliConfig) -> CliResult<Option<usize>> {
        match self.threads {
            Some(0) => Err(CliError::InvalidArgument(
                "thread count must be greater than 0".to_string(),
            )
            .into()),
            Some(threads) => Ok(Some(threads)),
            None if self.parallel => Ok(Some(match config.performance.worker_threads {
                0 => num_cpus::get(),
                threads => threads,
            })),
            None => Ok(None),
        }
    }

    fn open_output(&self) -> CliResult<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout()))),
        }
    }
}

/// Hyphenate every file, keeping input order.
///
/// With `threads` set the files are spread over a dedicated pool.
pub fn hyphenate_files(
    hyphenator: &Hyphenator,
    files: &[PathBuf],
    separator: &str,
    threads: Option<usize>,
    progress: &ProgressReporter,
) -> CliResult<Vec<Document>> {
    let hyphenate_one = |path: &PathBuf| -> CliResult<Document> {
        let document = hyphenate_file(hyphenator, path, separator)?;
        progress.file_completed(&path.display().to_string());
        Ok(document)
    };

    match threads {
        Some(threads) => {
            log::debug!("Using {threads} worker thread(s)");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker pool")?;
            pool.install(|| files.par_iter().map(hyphenate_one).collect())
        }
        None => files.iter().map(hyphenate_one).collect(),
    }
}

fn hyphenate_file(hyphenator: &Hyphenator, path: &Path, separator: &str) -> CliResult<Document> {
    let content = FileReader::read_text(path)?;
    Ok(Document {
        source: path.to_path_buf(),
        text: hyphenator.hyphenate_text(&content, separator),
    })
}
