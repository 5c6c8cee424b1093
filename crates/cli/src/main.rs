//! erp-env - resolve ERP suite configuration from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging and map command failures to exit codes.
//!
//! Does NOT handle:
//! - Document parsing or override rules (see `crates/config`).
//! - Per-command behavior (see `dispatch` and `commands`).
//!
//! Invariants:
//! - Logs go to stderr so stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
