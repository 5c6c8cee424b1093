//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read the config directory and environment from flags or environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load settings (see `main`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "erp-env")]
#[command(about = "Resolve ERP suite configuration and generate per-module env files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  erp-env --module crm --env production generate\n  erp-env --module hrm generate --stdout\n  erp-env show --format json\n  erp-env url postgres finance\n  erp-env vars\n"
)]
pub struct Cli {
    /// Directory holding config.yaml, environments/, and .env overlays.
    ///
    /// When unset, the nearest `shared-config` directory above the working directory is used.
    #[arg(long, global = true, env = "ERP_CONFIG_PATH", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Deployment environment (development, staging, production)
    #[arg(short, long = "env", global = true, env = "ERP_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Module to resolve values for (auth, crm, hrm, finance, inventory, projects, ai, frontend)
    #[arg(short, long, global = true, default_value = "auth")]
    pub module: String,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the env file for the selected module
    Generate {
        /// Output file path (defaults to .env.<module>.<environment>)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Print the resolved settings tree
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Yaml)]
        format: ShowFormat,

        /// Print credentials instead of redacting them
        #[arg(long)]
        reveal_secrets: bool,
    },

    /// Print a derived connection string or endpoint
    Url {
        /// Subsystem to describe
        #[arg(value_enum)]
        subsystem: Subsystem,

        /// Purpose key (database, cache purpose, ...). Defaults to the module's own.
        purpose: Option<String>,
    },

    /// List the environment variables that override document values
    Vars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Yaml,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Subsystem {
    Postgres,
    Mongodb,
    Redis,
    Kafka,
    Qdrant,
    Elasticsearch,
}
