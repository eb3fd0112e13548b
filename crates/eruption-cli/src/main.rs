//! Eruption assessment CLI.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use eruption_core::CoreConfig;

mod cli;
mod commands;
mod logging;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_history, run_layout, run_submit};
use crate::logging::{init_logging, LogConfig};

fn main() -> ExitCode {
    // A missing .env is normal; a malformed one is worth reporting.
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            eprintln!("warning: ignoring .env: {error}");
        }
    }

    let cli = Cli::parse();
    if let Err(error) = init_logging(&LogConfig::from_verbosity(cli.verbose, cli.log_format)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = core_config(cli)?;
    tracing::debug!(
        persist_mode = %config.persist_mode(),
        export = config.export_dir().is_some(),
        "configuration resolved"
    );

    match &cli.command {
        Command::Layout => run_layout(),
        Command::Submit(args) => run_submit(&config, args),
        Command::History(args) => run_history(&config, args),
    }
}

/// Resolve configuration once; flags win over environment and `.env`.
fn core_config(cli: &Cli) -> Result<CoreConfig> {
    Ok(CoreConfig::new(
        cli.db.clone(),
        cli.export_dir.clone(),
        cli.persist_mode.unwrap_or_default(),
    )?)
}
