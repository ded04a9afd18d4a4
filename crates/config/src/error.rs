//! Error types for the configuration store and loader.
//!
//! Responsibilities:
//! - Define error variants for key parsing, typed access, file I/O and
//!   environment loading.
//! - Provide conversion from lower-level errors (e.g., `ConfigFileError`).
//!
//! Does NOT handle:
//! - Missing keys. Absence is reported through `Option`, never as an error.
//!
//! Invariants:
//! - All error variants include context for debugging (keys, variable names, paths).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::persistence::ConfigFileError;

/// Errors that can occur while reading, writing or loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Configuration root must be a mapping, found {found}")]
    InvalidRoot { found: &'static str },

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Value at '{key}' has an unexpected shape: {source}")]
    Deserialize {
        key: String,
        source: serde_json::Error,
    },

    #[error("Failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigFileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config file at {path} must contain a JSON object, found {found}")]
    ConfigFileRoot { path: PathBuf, found: &'static str },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    pub(crate) fn invalid_key(key: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<ConfigFileError> for ConfigError {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::Read { path, source } => ConfigError::ConfigFileRead { path, source },
            ConfigFileError::Parse { path, source } => {
                ConfigError::ConfigFileParse { path, source }
            }
            ConfigFileError::NotAMapping { path, found } => {
                ConfigError::ConfigFileRoot { path, found }
            }
            ConfigFileError::Write { path, source } => {
                ConfigError::ConfigFileWrite { path, source }
            }
        }
    }
}
