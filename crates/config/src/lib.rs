//! Configuration resolution for the ERP service suite.
//!
//! This crate loads the shared settings document, applies environment
//! overrides, and derives connection strings and per-module names from the
//! resolved tree. It also renders per-module env files.

pub mod constants;
mod loader;
pub mod module;
pub mod providers;
pub mod render;
pub mod types;

pub use loader::{
    ConfigError, Layered, OverrideSource, ProcessEnv, RejectedOverride, Resolution,
    SettingsLoader, discover_config_dir, discover_config_dir_from, dotenv_path,
    env_var_or_none, environment_document_path, expand_vars, load_document, load_document_with,
    main_document_path, override_vars, resolve, resolve_with_report,
};
pub use module::ModuleId;
pub use providers::{
    CachePurpose, CollectionPurpose, ConsumerRole, DatabasePurpose, IndexPurpose, MongoPurpose,
    TopicPurpose,
};
pub use render::{default_output_name, render_env_file};
pub use types::{Secret, ServiceEndpoint, Settings};
