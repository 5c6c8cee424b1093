//! Tests for the settings loader builder.
//!
//! Responsibilities:
//! - Test builder layering: documents, dotenv overlay, process environment, explicit overrides.
//! - Test dotenv gating and error reporting.
//!
//! Does NOT handle:
//! - Substitution, override parsing, and decoding details (tested beside their modules).
//!
//! Invariants:
//! - Tests use `serial_test` and `env_lock()` to prevent environment variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::Path;
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `body` to `<dir>/<relative>`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, body: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

/// Run `f` with every variable the loader reads unset, except `set`.
pub fn with_clean_env<R>(set: &[(&'static str, &'static str)], f: impl FnOnce() -> R) -> R {
    let mut vars: Vec<(&'static str, Option<&'static str>)> = crate::loader::override_vars()
        .chain(["DOTENV_DISABLED", "ERP_CONFIG_PATH"])
        .filter(|var| !set.iter().any(|(name, _)| name == var))
        .map(|var| (var, None))
        .collect();
    vars.extend(set.iter().map(|&(name, value)| (name, Some(value))));
    temp_env::with_vars(vars, f)
}
