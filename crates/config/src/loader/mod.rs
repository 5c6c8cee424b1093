//! Settings loader for documents, dotenv overlays, and environment overrides.
//!
//! Responsibilities:
//! - Read the settings document, substituting variable references before decoding.
//! - Overlay a fixed whitelist of environment overrides onto the decoded tree.
//! - Provide a builder-pattern `SettingsLoader` that composes discovery and all layers.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Derived values such as connection strings (see `providers`).
//! - Rendering env files (see `render`).
//!
//! Invariants / Assumptions:
//! - Environment overrides take precedence over document values.
//! - `load_dotenv()` must be called explicitly to enable `.env` overlay loading.
//! - The process environment is never mutated.

mod builder;
mod document;
mod env;
mod error;
mod expand;
mod overrides;
mod path;

#[cfg(test)]
mod tests;

pub use builder::SettingsLoader;
pub use document::{load_document, load_document_with};
pub use env::{ProcessEnv, env_var_or_none};
pub use error::ConfigError;
pub use expand::expand_vars;
pub use overrides::{
    Layered, OverrideSource, RejectedOverride, Resolution, override_vars, resolve,
    resolve_with_report,
};
pub use path::{
    discover_config_dir, discover_config_dir_from, dotenv_path, environment_document_path,
    main_document_path,
};
