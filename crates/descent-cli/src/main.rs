//! `descent` command-line driver.

mod cli;
mod commands;
mod config;

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, Level};

use cli::{Cli, Command};
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("descent error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_explicit(path)?,
        None => Config::load(&std::env::current_dir()?),
    };
    if let Some(path) = &config.config_path {
        debug!("using config {}", path.display());
    }

    match cli.command {
        Command::Parse {
            file,
            format,
            indent,
            lines,
        } => {
            let output = config.output.with_overrides(format, indent, lines);
            commands::run_parse(&file, &output)
        }
        Command::Tokens { file } => commands::run_tokens(&file),
    }
}
