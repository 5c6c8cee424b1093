//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` that composes discovery, the dotenv
//!   overlay, document decoding, and the override overlay into one `load()` call.
//!
//! Does NOT handle:
//! - Variable substitution or decoding details (see document.rs, expand.rs).
//! - Which fields an override may touch (see overrides.rs).
//!
//! Invariants / Assumptions:
//! - Precedence, highest first: builder overrides, process environment, dotenv overlay,
//!   document values, field defaults.
//! - The process environment is consulted only after `from_env()`.
//! - `.env` overlays are read only after `load_dotenv()`, and never when
//!   `DOTENV_DISABLED` is `1` or `true`. They are never written into the process environment.
//! - A missing main document yields an all-default tree; a missing document passed to
//!   `with_document()` is `ConfigError::NotFound`.

use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::document::{decode_settings, merge_values, read_document_value};
use super::env::{ProcessEnv, dotenv_disabled};
use super::error::ConfigError;
use super::overrides::{Layered, OverrideSource, Resolution, resolve_with_report};
use super::path::{discover_config_dir, dotenv_path, environment_document_path, main_document_path};
use crate::constants::{DEFAULT_ENVIRONMENT, ENVIRONMENT_VAR};
use crate::types::Settings;

/// Loader that builds a resolved `Settings` tree from documents and overrides.
#[derive(Default)]
pub struct SettingsLoader {
    config_dir: Option<PathBuf>,
    document: Option<PathBuf>,
    environment: Option<String>,
    overrides: BTreeMap<String, String>,
    use_process_env: bool,
    load_dotenv: bool,
}

impl SettingsLoader {
    /// Create a loader that reads only documents and builder overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `dir` as the configuration directory instead of discovering it.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Load this document instead of `<config dir>/config.yaml`.
    ///
    /// The per-environment document is not merged when a document is given explicitly.
    pub fn with_document(mut self, path: impl Into<PathBuf>) -> Self {
        self.document = Some(path.into());
        self
    }

    /// Select the deployment environment (e.g. `production`).
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Set one override with the highest precedence.
    pub fn with_override(mut self, var: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(var.into(), value.into());
        self
    }

    /// Set several overrides with the highest precedence.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.overrides
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Read `<config dir>/environments/<env>.env` as an override layer if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1" at load time, the file is skipped
    /// (useful for testing).
    pub fn load_dotenv(mut self) -> Self {
        self.load_dotenv = true;
        self
    }

    /// Consult the process environment for overrides, substitution, and the
    /// `ERP_ENVIRONMENT` selection.
    pub fn from_env(mut self) -> Self {
        self.use_process_env = true;
        self
    }

    /// Resolve the settings tree.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A document passed to `with_document()` does not exist (`ConfigError::NotFound`)
    /// - A document exists but cannot be read or decoded (`ConfigError::Read`, `ConfigError::Decode`)
    /// - The dotenv overlay exists but is invalid (`ConfigError::DotenvParse`, `ConfigError::DotenvIo`)
    pub fn load(self) -> Result<Settings, ConfigError> {
        self.load_with_report().map(|resolution| resolution.settings)
    }

    /// Like [`SettingsLoader::load`], also reporting applied and rejected overrides.
    pub fn load_with_report(self) -> Result<Resolution, ConfigError> {
        let mut upper = Layered::new().with(&self.overrides);
        if self.use_process_env {
            upper = upper.with(&ProcessEnv);
        }

        let environment = self.selected_environment(&upper);
        let config_dir = discover_config_dir(self.config_dir.as_deref());

        let dotenv = if self.load_dotenv && !dotenv_disabled() {
            read_dotenv(&dotenv_path(&config_dir, &environment))?
        } else {
            BTreeMap::new()
        };
        let source = upper.with(&dotenv);

        let (document, origin) = self.read_documents(&config_dir, &environment, &source)?;
        let settings = decode_settings(document, &origin)?;

        let mut resolution = resolve_with_report(settings, &source);
        if resolution.settings.environment.current.is_empty() {
            resolution.settings.environment.current = environment;
        }
        Ok(resolution)
    }

    fn selected_environment(&self, source: &dyn OverrideSource) -> String {
        self.environment
            .as_deref()
            .map(str::trim)
            .filter(|env| !env.is_empty())
            .map(str::to_string)
            .or_else(|| source.value(ENVIRONMENT_VAR))
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
    }

    /// Read the document tree and the path errors should name.
    fn read_documents(
        &self,
        config_dir: &Path,
        environment: &str,
        source: &dyn OverrideSource,
    ) -> Result<(Value, PathBuf), ConfigError> {
        if let Some(path) = &self.document {
            return Ok((read_document_value(path, source)?, path.clone()));
        }

        let main = main_document_path(config_dir);
        let mut document = if main.is_file() {
            read_document_value(&main, source)?
        } else {
            tracing::debug!(path = %main.display(), "no main settings document, using defaults");
            Value::Mapping(Mapping::new())
        };

        let overlay = environment_document_path(config_dir, environment);
        if overlay.is_file() {
            merge_values(&mut document, read_document_value(&overlay, source)?);
        }

        Ok((document, main))
    }
}

/// Read a dotenv file into a map. A missing file yields an empty map.
fn read_dotenv(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if is_not_found(&e) => return Ok(BTreeMap::new()),
        Err(e) => return Err(ConfigError::from_dotenv(path.to_path_buf(), e)),
    };

    let vars = iter
        .map(|item| item.map_err(|e| ConfigError::from_dotenv(path.to_path_buf(), e)))
        .collect::<Result<BTreeMap<_, _>, _>>()?;
    tracing::debug!(path = %path.display(), count = vars.len(), "loaded dotenv overlay");
    Ok(vars)
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
