//! CLI definitions for descent.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "descent",
    version,
    about = "Predictive parser for the descent statement language",
    after_help = "Examples:\n  descent parse program.txt              # event dump\n  descent parse program.txt --format tree\n  descent tokens program.txt"
)]
pub struct Cli {
    /// Log parser decisions to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Configuration file (defaults to ./descent.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a source file and print its parse events.
    Parse {
        /// Source file to parse.
        file: PathBuf,
        /// Output format (overrides the config file).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Spaces per nesting level in the event dump.
        #[arg(long)]
        indent: Option<usize>,
        /// Append the source line to every accepted terminal.
        #[arg(long, action = ArgAction::SetTrue)]
        lines: bool,
    },
    /// Print the tokens of a source file, one per line.
    Tokens {
        /// Source file to tokenize.
        file: PathBuf,
    },
}
