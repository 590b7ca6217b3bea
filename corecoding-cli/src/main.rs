//! Command-line entry point for corecoding

use anyhow::Result;
use clap::Parser;
use corecoding_cli::commands::Commands;

/// Classify subject, object and agreement coding of clauses in CoNLL-U treebanks
#[derive(Debug, Parser)]
#[command(name = "corecoding", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
