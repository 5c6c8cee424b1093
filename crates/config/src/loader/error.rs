//! Error types for settings loading.
//!
//! Responsibilities:
//! - Define error variants for document and dotenv loading failures.
//!
//! Does NOT handle:
//! - Override parse failures (not errors; see `overrides::RejectedOverride`).
//! - Unrecognized lookup keys (never errors; see `providers`).
//!
//! Invariants:
//! - Every variant carries the path it failed on.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings document not found at {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read settings document at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode settings document at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to parse a `.env` overlay due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file {path} at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { path: PathBuf, error_index: usize },

    /// Failed to read a `.env` overlay due to an I/O error.
    #[error("Failed to read .env file {path}: {kind}")]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file {path}. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown { path: PathBuf },
}

impl ConfigError {
    /// Build the error for a failed document read, separating "missing" from other I/O failures.
    pub(crate) fn from_read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == ErrorKind::NotFound {
            ConfigError::NotFound { path }
        } else {
            ConfigError::Read { path, source }
        }
    }

    /// Build the error for a failed dotenv load. Raw line content is dropped.
    pub(crate) fn from_dotenv(path: PathBuf, error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, error_index) => {
                ConfigError::DotenvParse { path, error_index }
            }
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                path,
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown { path },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err = ConfigError::from_read(
            PathBuf::from("/nope/config.yaml"),
            std::io::Error::from(ErrorKind::NotFound),
        );
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("/nope/config.yaml"));
    }

    #[test]
    fn test_other_io_failure_maps_to_read() {
        let err = ConfigError::from_read(
            PathBuf::from("config.yaml"),
            std::io::Error::from(ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_dotenv_parse_error_drops_line_content() {
        let err = ConfigError::from_dotenv(
            PathBuf::from("development.env"),
            dotenvy::Error::LineParse("SECRET=hunter2 oops".to_string(), 14),
        );
        let message = err.to_string();
        assert!(matches!(err, ConfigError::DotenvParse { error_index: 14, .. }));
        assert!(!message.contains("hunter2"));
    }
}
