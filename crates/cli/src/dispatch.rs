//! Command dispatch logic.
//!
//! Responsibilities:
//! - Load the settings tree for commands that need it.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - The loader always consults the process environment and the dotenv overlay.
//! - Rejected overrides surface as loader warnings and never abort the run.

use anyhow::{Context, Result};
use erp_config::{ModuleId, Resolution, SettingsLoader};

use crate::args::{Cli, Commands};
use crate::commands;

pub(crate) fn run_command(cli: Cli) -> Result<()> {
    if matches!(cli.command, Commands::Vars) {
        return commands::vars::run();
    }

    let module = ModuleId::parse(&cli.module);
    if module == ModuleId::Unknown {
        tracing::warn!(module = %cli.module, "unknown module, using auth values");
    }
    let settings = load_settings(&cli)?.settings;
    let environment = selected_environment(&cli)
        .unwrap_or(settings.environment.current.as_str())
        .to_string();

    match cli.command {
        Commands::Generate { output, stdout } => {
            commands::generate::run(&settings, module, &environment, output, stdout)
        }
        Commands::Show {
            format,
            reveal_secrets,
        } => commands::show::run(&settings, format, reveal_secrets),
        Commands::Url { subsystem, purpose } => {
            commands::url::run(&settings, module, subsystem, purpose.as_deref())
        }
        Commands::Vars => commands::vars::run(),
    }
}

/// The `--env` value, ignoring blanks.
fn selected_environment(cli: &Cli) -> Option<&str> {
    cli.environment
        .as_deref()
        .map(str::trim)
        .filter(|env| !env.is_empty())
}

fn load_settings(cli: &Cli) -> Result<Resolution> {
    let mut loader = SettingsLoader::new();

    // Blank values fall through to discovery, like blank environment variables.
    if let Some(dir) = cli
        .config_dir
        .as_ref()
        .filter(|dir| !dir.to_string_lossy().trim().is_empty())
    {
        loader = loader.with_config_dir(dir.clone());
    }
    if let Some(environment) = selected_environment(cli) {
        loader = loader.with_environment(environment);
    }

    let resolution = loader
        .from_env()
        .load_dotenv()
        .load_with_report()
        .context("Failed to load configuration")?;

    tracing::debug!(
        environment = %resolution.settings.environment.current,
        applied = resolution.applied.len(),
        rejected = resolution.rejected.len(),
        "settings resolved"
    );

    Ok(resolution)
}
