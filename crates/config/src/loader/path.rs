//! Configuration directory discovery and document locations.
//!
//! Responsibilities:
//! - Locate the shared configuration directory.
//! - Name the main document, per-environment document, and dotenv overlay inside it.
//!
//! Does NOT handle:
//! - Reading any of the files it names.
//!
//! Invariants:
//! - Discovery order: explicit path, then `ERP_CONFIG_PATH`, then the nearest
//!   `shared-config` directory walking up from the start directory, then the
//!   relative path `shared-config`.
//! - Discovery never fails; a missing directory surfaces later as missing documents.

use std::path::{Path, PathBuf};

use super::env::env_var_or_none;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_PATH_VAR, ENVIRONMENTS_DIR, MAIN_DOCUMENT};

/// Find the configuration directory, walking up from the working directory.
pub fn discover_config_dir(explicit: Option<&Path>) -> PathBuf {
    let start = std::env::current_dir().unwrap_or_default();
    discover_config_dir_from(explicit, &start)
}

/// Find the configuration directory, walking up from `start`.
pub fn discover_config_dir_from(explicit: Option<&Path>, start: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = env_var_or_none(CONFIG_PATH_VAR) {
        return PathBuf::from(path);
    }
    if let Some(found) = start
        .ancestors()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .find(|candidate| candidate.is_dir())
    {
        tracing::debug!(path = %found.display(), "discovered configuration directory");
        return found;
    }
    PathBuf::from(CONFIG_DIR_NAME)
}

/// `<dir>/config.yaml`
pub fn main_document_path(config_dir: &Path) -> PathBuf {
    config_dir.join(MAIN_DOCUMENT)
}

/// `<dir>/environments/<env>.yaml`
pub fn environment_document_path(config_dir: &Path, environment: &str) -> PathBuf {
    config_dir
        .join(ENVIRONMENTS_DIR)
        .join(format!("{environment}.yaml"))
}

/// `<dir>/environments/<env>.env`
pub fn dotenv_path(config_dir: &Path, environment: &str) -> PathBuf {
    config_dir
        .join(ENVIRONMENTS_DIR)
        .join(format!("{environment}.env"))
}
