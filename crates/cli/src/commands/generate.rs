//! Env file generation for one module.

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use erp_config::{ModuleId, Settings, default_output_name, render_env_file};
use std::fs;
use std::path::PathBuf;

pub fn run(
    settings: &Settings,
    module: ModuleId,
    environment: &str,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let rendered = render_env_file(settings, module, environment, &timestamp);

    if stdout {
        print!("{rendered}");
        return Ok(());
    }

    let path = output.unwrap_or_else(|| {
        PathBuf::from(default_output_name(module.effective().as_str(), environment))
    });
    fs::write(&path, rendered)
        .with_context(|| format!("Failed to write env file {}", path.display()))?;

    tracing::info!(path = %path.display(), module = %module.effective(), "env file written");
    println!("Environment file generated: {}", path.display());
    Ok(())
}
