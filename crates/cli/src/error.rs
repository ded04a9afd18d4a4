//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` and `CliError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Clap usage errors keep clap's own exit code (2).

use dotcfg_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for dotcfg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unreadable or corrupt files, I/O failures.
    GeneralError = 1,

    /// Key not found and no default supplied.
    ///
    /// Scripts can treat this as "unset" rather than as a failure.
    NotFound = 4,

    /// Validation error - malformed key, invalid JSON argument.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Errors raised by the CLI itself rather than by the config library.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Key '{0}' not found")]
    KeyNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidKey { .. }
            | ConfigError::InvalidRoot { .. }
            | ConfigError::InvalidJson(_)
            | ConfigError::InvalidValue { .. }
            | ConfigError::Deserialize { .. }
            | ConfigError::Serialize { .. } => ExitCode::ValidationError,

            ConfigError::ConfigFileRead { .. }
            | ConfigError::ConfigFileParse { .. }
            | ConfigError::ConfigFileRoot { .. }
            | ConfigError::ConfigFileWrite { .. }
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::KeyNotFound(_) => ExitCode::NotFound,
            CliError::InvalidArgument(_) => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
        }

        ExitCode::GeneralError
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
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
    }

    #[test]
    fn test_key_not_found_maps_to_not_found() {
        let err = anyhow::Error::from(CliError::KeyNotFound("db.host".to_string()));
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_invalid_key_maps_to_validation_error() {
        let err = anyhow::Error::from(ConfigError::InvalidKey {
            key: "a..b".to_string(),
            reason: "segment 2 is empty".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let result: Result<(), ConfigError> = Err(ConfigError::ConfigFileParse {
            path: PathBuf::from("config.json"),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        });
        let err = result.context("Failed to load config.json").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::GeneralError);

        let result: Result<(), CliError> = Err(CliError::InvalidArgument("x".to_string()));
        let err = result.context("while merging").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
