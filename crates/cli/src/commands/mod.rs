//! CLI command implementations.

pub mod generate;
pub mod show;
pub mod url;
pub mod vars;
