//! Dot-path configuration store.
//!
//! This crate provides a tree of configuration values addressed by
//! dot-delimited keys (`"database.connections.primary"`) with `get`, `set`,
//! `defaults` and `merge` operations, plus a layered loader for JSON files
//! and environment variables.
//!
//! ```
//! use dotcfg_config::ConfigStore;
//! use serde_json::json;
//!
//! let mut config = ConfigStore::default();
//! config.set("db.host", "localhost").unwrap();
//! config.defaults("db.host", "other").unwrap();
//!
//! assert_eq!(config.get("db.host"), Some(&json!("localhost")));
//! assert_eq!(config.get_or("db.port", 5432), json!(5432));
//! ```

pub mod constants;
mod contract;
mod error;
mod loader;
mod merge;
pub mod path;
pub mod persistence;
mod shared;
mod store;
pub mod value;

pub use contract::ConfigContract;
pub use error::ConfigError;
pub use loader::{ConfigLoader, env_var_or_none};
pub use merge::{MergeConflict, keep_existing};
pub use path::KeyPath;
pub use persistence::{ConfigFileError, read_config_file, write_config_file};
pub use shared::SharedConfig;
pub use store::ConfigStore;
pub use value::{Mapping, Value, parse_lenient};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
