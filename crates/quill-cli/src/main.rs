//! Quill CLI - log values from the command line.
//!
//! Loads the layered configuration, applies command-line overrides and logs
//! the given values through a stdout logger.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use anyhow::{Context, Result};
use clap::Parser;
use quill_logger::Loggers;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

mod args;

use args::Cli;

fn setup_diagnostics(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let layer = fmt::layer().compact().with_writer(std::io::stderr);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_diagnostics(cli.verbose);

    let loggers = Loggers::load(cli.workspace.as_deref()).context("failed to load configuration")?;
    let logger = loggers.get(&cli.category)?;
    logger.configure(cli.apply(logger.options()));

    if logger.log(cli.level, &cli.payload()).is_none() {
        debug!(level = %cli.level, threshold = %logger.level(), "line below threshold");
    }

    Ok(())
}
