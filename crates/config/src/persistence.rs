//! JSON configuration files on disk.
//!
//! Responsibilities:
//! - Read a config file into a mapping.
//! - Write a mapping to a config file atomically (temp file + rename).
//!
//! Does NOT handle:
//! - Layering file contents with other sources (see `loader`).
//!
//! Invariants:
//! - A config file's root is a JSON object.
//! - A write never leaves a half-written target file behind.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::TEMP_FILE_EXTENSION;
use crate::value::{Mapping, Value, kind_name};

/// Errors reading or writing a config file.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config file at {path} must contain a JSON object, found {found}")]
    NotAMapping { path: PathBuf, found: &'static str },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConfigFileError {
    /// Whether this error means the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigFileError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Reads and parses the config file at `path`.
pub fn read_config_file(path: &Path) -> Result<Mapping, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(tree) => Ok(tree),
        other => Err(ConfigFileError::NotAMapping {
            path: path.to_path_buf(),
            found: kind_name(&other),
        }),
    }
}

/// Writes `tree` to `path` as pretty-printed JSON.
///
/// The parent directory is created if missing. Content goes to
/// `<file name>.tmp` next to the target first and is then renamed over it.
/// The temporary file is removed if either step fails.
pub fn write_config_file(path: &Path, tree: &Mapping) -> Result<(), ConfigFileError> {
    let write_error = |source| ConfigFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(tree)
        .map_err(|e| write_error(std::io::Error::other(e)))?;

    let temp_path = temp_path_for(path);
    if let Err(source) =
        std::fs::write(&temp_path, content).and_then(|()| std::fs::rename(&temp_path, path))
    {
        let _ = std::fs::remove_file(&temp_path);
        return Err(write_error(source));
    }

    tracing::debug!(path = %path.display(), "Config saved atomically");

    Ok(())
}

/// Temporary sibling of `path`, with `.tmp` appended to the full file name.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(TEMP_FILE_EXTENSION);
    path.with_file_name(name)
}
