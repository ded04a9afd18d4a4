//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from a JSON file, environment variables and direct builder methods.
//! - Build the final `ConfigStore` from the loaded layers.
//!
//! Does NOT handle:
//! - Environment variable parsing logic (delegated to env.rs).
//! - Parsing or writing config files (delegated to persistence.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values.
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use super::env::collect_env;
use crate::constants::DOTENV_DISABLED_VAR;
use crate::error::ConfigError;
use crate::merge::{keep_existing, merge_mappings};
use crate::persistence::read_config_file;
use crate::store::ConfigStore;
use crate::value::{Mapping, Value};

/// Configuration loader that layers defaults, a file, the environment and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    defaults: Mapping,
    config_path: Option<PathBuf>,
    file_layer: Option<Mapping>,
    env_prefix: Option<String>,
    env_layer: Option<Mapping>,
    overrides: Vec<(String, Value)>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Seed values with the lowest precedence.
    ///
    /// Repeated calls are deep-merged, later calls winning.
    pub fn with_defaults(mut self, defaults: Mapping) -> Self {
        self.defaults = merge_mappings(&defaults, self.defaults, &keep_existing, "");
        self
    }

    /// Set the JSON config file read by [`ConfigLoader::from_file`].
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// The configured file path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Read the config file set by [`ConfigLoader::with_config_path`].
    ///
    /// A missing file is not an error; the file layer is simply empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigFileRead`, `ConfigFileParse` or
    /// `ConfigFileRoot` if the file exists but cannot be used.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let Some(path) = self.config_path.as_deref() else {
            return Ok(self);
        };

        match read_config_file(path) {
            Ok(tree) => {
                tracing::debug!(path = %path.display(), keys = tree.len(), "Loaded config file");
                self.file_layer = Some(tree);
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "Config file not found, skipping");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(self)
    }

    /// Set the prefix of environment variables read by [`ConfigLoader::from_env`].
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// The configured environment prefix, if any.
    pub fn env_prefix(&self) -> Option<&str> {
        self.env_prefix.as_deref()
    }

    /// Read configuration from environment variables under the configured prefix.
    ///
    /// Without a prefix this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable name does not map to
    /// a valid key path.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if let Some(prefix) = self.env_prefix.as_deref() {
            let layer = collect_env(prefix)?;
            tracing::debug!(prefix, keys = layer.len(), "Loaded environment overrides");
            self.env_layer = Some(layer);
        }
        Ok(self)
    }

    /// Write `value` at `key` after every other layer has been applied.
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Build the final store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` if an override key is malformed.
    pub fn build(self) -> Result<ConfigStore, ConfigError> {
        let mut tree = self.defaults;
        for layer in [self.file_layer, self.env_layer].into_iter().flatten() {
            tree = merge_mappings(&layer, tree, &keep_existing, "");
        }

        let mut store = ConfigStore::new(tree);
        for (key, value) in self.overrides {
            store.set(&key, value)?;
        }

        tracing::debug!(keys = store.as_mapping().len(), "Configuration built");
        Ok(store)
    }
}
