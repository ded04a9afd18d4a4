//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Collect prefixed environment variables into a configuration layer.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - .env file loading (handled by `ConfigLoader::load_dotenv`).
//! - Precedence between layers (handled by `ConfigLoader::build`).
//!
//! Invariants:
//! - `<PREFIX>__A__B` addresses key `a.b`; the prefix match is case-sensitive,
//!   path segments are lower-cased.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Values that parse as JSON are stored as JSON, everything else as a string.
//! - Variables are applied in name order, so `APP__DB` is overwritten by `APP__DB__PORT`.

use crate::constants::ENV_SEGMENT_SEPARATOR;
use crate::error::ConfigError;
use crate::store::ConfigStore;
use crate::value::{Mapping, parse_lenient};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Build a configuration layer from every variable under `prefix`.
pub(crate) fn collect_env(prefix: &str) -> Result<Mapping, ConfigError> {
    let marker = format!("{prefix}{ENV_SEGMENT_SEPARATOR}");

    let mut names: Vec<String> = std::env::vars_os()
        .filter_map(|(name, _)| name.into_string().ok())
        .filter(|name| name.starts_with(&marker))
        .collect();
    names.sort();

    let mut layer = ConfigStore::default();
    for name in names {
        let Some(raw) = env_var_or_none(&name) else {
            continue;
        };
        let key = env_name_to_key(&name[marker.len()..]);
        layer
            .set(&key, parse_lenient(&raw))
            .map_err(|e| ConfigError::InvalidValue {
                var: name.clone(),
                message: e.to_string(),
            })?;
        tracing::trace!(var = %name, key = %key, "environment override collected");
    }

    Ok(layer.into_mapping())
}

/// `DB__PORT` -> `db.port`.
fn env_name_to_key(suffix: &str) -> String {
    suffix
        .split(ENV_SEGMENT_SEPARATOR)
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_name_to_key() {
        assert_eq!(env_name_to_key("DB__PORT"), "db.port");
        assert_eq!(env_name_to_key("LOG_LEVEL"), "log_level");
        assert_eq!(env_name_to_key("SERVERS__0__NAME"), "servers.0.name");
    }

    #[test]
    fn test_env_name_with_empty_segment_keeps_gap() {
        assert_eq!(env_name_to_key("DB____PORT"), "db..port");
        assert_eq!(env_name_to_key("__DB"), ".db");
    }
}
