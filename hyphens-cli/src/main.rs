//! Command-line entry point for hyphens

use clap::Parser;
use hyphens_cli::{commands::Commands, CliResult};

/// Liang hyphenation: insert soft hyphens into text
#[derive(Debug, Parser)]
#[command(name = "hyphens", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
