//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors.

use erp_config::ConfigError;

/// Structured exit codes for erp-env.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure, including I/O.
    GeneralError = 1,

    /// An explicitly named settings document does not exist.
    ///
    /// Scripts should check the `--config-dir` / `ERP_CONFIG_PATH` value.
    NotFound = 4,

    /// A settings document or dotenv overlay could not be parsed.
    ///
    /// Scripts should fix the file and not retry.
    DecodeError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::NotFound { .. } => ExitCode::NotFound,
            ConfigError::Decode { .. } | ConfigError::DotenvParse { .. } => {
                ExitCode::DecodeError
            }
            ConfigError::Read { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::DecodeError.as_i32(), 5);
    }

    #[test]
    fn test_from_config_error_not_found() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("config.yaml"),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_from_config_error_dotenv_parse() {
        let err = ConfigError::DotenvParse {
            path: PathBuf::from(".env"),
            error_index: 3,
        };
        assert_eq!(ExitCode::from(&err), ExitCode::DecodeError);
    }

    #[test]
    fn test_from_config_error_read_failure() {
        let err = ConfigError::Read {
            path: PathBuf::from("config.yaml"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = anyhow::Error::from(ConfigError::NotFound {
            path: PathBuf::from("config.yaml"),
        })
        .context("failed to load settings");
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_unrelated_error_is_general() {
        let err: anyhow::Result<()> =
            Err(std::io::Error::other("disk full")).context("writing env file");
        assert_eq!(err.unwrap_err().exit_code(), ExitCode::GeneralError);
    }
}
