//! CLI command implementations

use clap::{Subcommand, ValueEnum};
use hyphens_core::Language;

use crate::error::CliResult;
use crate::output::OutputFormat;

pub mod generate_config;
pub mod process;
pub mod validate;
pub mod word;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert separators into text files
    Process(process::ProcessArgs),

    /// Hyphenate words given on the command line
    Word(word::WordArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List built-in languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Word(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed by `list`
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Languages => {
                out.push_str("Built-in languages:\n");
                for language in Language::all() {
                    out.push_str(&format!("  {:<4} {}\n", language.code(), language.name()));
                }
                out.push_str("\nCombine codes with '+', e.g. en+ru\n");
            }
            ListCommands::Formats => {
                out.push_str("Output formats:\n");
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        out.push_str(&format!("  {:<9} {}\n", value.get_name(), format.description()));
                    }
                }
            }
        }
        out
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
