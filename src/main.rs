//! `notice-checkr` — aggregate installed npm dependency licenses into a
//! third-party notice file.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and install the `tracing` subscriber.
//! 2. Load config ([`config::load_config`]).
//! 3. Scan `Tasks/<task>/node_modules` and `Tasks/<task>/Tests/node_modules`
//!    ([`scanner`]), sort by name, and write `ThirdPartyNotice.txt`
//!    ([`notice`], [`driver::run`]).
//! 4. Optionally print a package table (`--summary`, [`report`]).
//! 5. Any failure is logged once. Exit `0` regardless, unless `--strict`.

mod cli;
mod config;
mod driver;
mod error;
mod logger;
mod models;
mod notice;
mod report;
mod scanner;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::load_config;
use driver::RunSummary;
use logger::{Logger, TracingLogger};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let logger = TracingLogger;
    let result = run(&cli, &logger);
    finish(result, &cli, &logger)
}

/// Report the outcome of a run and pick the exit status.
///
/// Failures are logged as one line. The status stays `0` unless `--strict`.
fn finish(result: Result<RunSummary>, cli: &Cli, logger: &dyn Logger) -> ExitCode {
    match result {
        Ok(summary) => {
            if cli.summary {
                report::terminal::render(&summary);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger.error(&format!("{:#}", e));
            if cli.strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn run(cli: &Cli, logger: &dyn Logger) -> Result<RunSummary> {
    let base = cli.base.canonicalize().unwrap_or_else(|_| cli.base.clone());
    let config = load_config(&base, cli.config.as_deref())?;
    driver::run(&base, cli.task.as_deref(), &config, logger)
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
