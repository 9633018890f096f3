//! `parse` and `tokens` subcommands.

use anyhow::Context;
use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

use descent_syntax::{debug_tree, lex, parse, parse_tokens, EventLog, Lexer, SyntaxError};

use crate::config::{OutputConfig, OutputFormat};

/// The printable result of parsing one source text.
#[derive(Debug)]
pub struct ParseReport {
    /// Event dump or tree, up to the point of failure.
    pub dump: String,
    pub error: Option<SyntaxError>,
}

pub fn parse_source(source: &str, output: &OutputConfig) -> ParseReport {
    match output.format {
        OutputFormat::Events => {
            let mut log = EventLog::new();
            let result = parse_tokens(Lexer::new(source), &mut log);
            debug!(events = log.events().len(), "parse finished");
            ParseReport {
                dump: log.render(&output.render_options()),
                error: result.err(),
            }
        }
        OutputFormat::Tree => {
            let parse = parse(source);
            ParseReport {
                dump: debug_tree(&parse.syntax()),
                error: parse.error().cloned(),
            }
        }
    }
}

/// Formats every token as `line symbol lexeme`, one per line.
pub fn token_listing(source: &str) -> String {
    let mut out = String::new();
    for token in lex(source) {
        let _ = writeln!(out, "{:<5} {:<16} {}", token.line, token.kind.name(), token.text());
    }
    out
}

pub fn run_parse(file: &Path, output: &OutputConfig) -> anyhow::Result<ExitCode> {
    let source = read_source(file)?;
    let report = parse_source(&source, output);
    print!("{}", report.dump);

    match report.error {
        Some(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        None => {
            info!("{} parsed", file.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

pub fn run_tokens(file: &Path) -> anyhow::Result<ExitCode> {
    let source = read_source(file)?;
    print!("{}", token_listing(&source));
    Ok(ExitCode::SUCCESS)
}

fn read_source(file: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}
