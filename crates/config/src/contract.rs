//! The four-operation configuration contract.
//!
//! Consumers that only need `get`, `merge`, `set` and `defaults` can accept
//! any `ConfigContract` and work with a plain [`ConfigStore`] or a
//! [`SharedConfig`] handle alike.

use crate::error::ConfigError;
use crate::merge::{MergeConflict, keep_existing};
use crate::shared::SharedConfig;
use crate::store::ConfigStore;
use crate::value::{Mapping, Value};

/// Read, merge, write and default-fill access to a configuration tree.
pub trait ConfigContract {
    /// Value at `key`, or `None` if nothing is stored there.
    fn get_value(&self, key: &str) -> Option<Value>;

    /// Value at `key`, or `default` if nothing is stored there.
    fn get_value_or(&self, key: &str, default: Value) -> Value {
        self.get_value(key).unwrap_or(default)
    }

    /// Merged view of the mapping at `key` over `defaults`, existing values winning.
    fn merge(&self, key: &str, defaults: Mapping) -> Mapping {
        self.merge_with(key, defaults, &keep_existing)
    }

    /// Merged view with `customizer` deciding conflicts.
    fn merge_with(
        &self,
        key: &str,
        defaults: Mapping,
        customizer: &dyn Fn(&MergeConflict<'_>) -> Option<Value>,
    ) -> Mapping;

    /// Write `value` at `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError>;

    /// Write `value` at `key` only if nothing is stored there.
    fn defaults(&mut self, key: &str, value: Value) -> Result<(), ConfigError>;
}

impl ConfigContract for ConfigStore {
    fn get_value(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }

    fn merge_with(
        &self,
        key: &str,
        defaults: Mapping,
        customizer: &dyn Fn(&MergeConflict<'_>) -> Option<Value>,
    ) -> Mapping {
        ConfigStore::merge_with(self, key, defaults, customizer)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        ConfigStore::set(self, key, value)
    }

    fn defaults(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        ConfigStore::defaults(self, key, value)
    }
}

impl ConfigContract for SharedConfig {
    fn get_value(&self, key: &str) -> Option<Value> {
        self.get(key)
    }

    fn merge_with(
        &self,
        key: &str,
        defaults: Mapping,
        customizer: &dyn Fn(&MergeConflict<'_>) -> Option<Value>,
    ) -> Mapping {
        SharedConfig::merge_with(self, key, defaults, customizer)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        SharedConfig::set(self, key, value)
    }

    fn defaults(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        SharedConfig::defaults(self, key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seed_database(config: &mut dyn ConfigContract) {
        config.set("db.host", json!("localhost")).unwrap();
        config.defaults("db.host", json!("other")).unwrap();
        config.defaults("db.port", json!(5432)).unwrap();
    }

    fn check_database(config: &dyn ConfigContract) {
        assert_eq!(config.get_value("db.host"), Some(json!("localhost")));
        assert_eq!(config.get_value("db.port"), Some(json!(5432)));
        assert_eq!(config.get_value_or("db.user", json!("app")), json!("app"));

        let defaults = match json!({"host": "x", "pool": 4}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let merged = config.merge("db", defaults);
        assert_eq!(
            Value::Object(merged),
            json!({"host": "localhost", "port": 5432, "pool": 4})
        );
        assert!(config.get_value("db.pool").is_none());
    }

    #[test]
    fn test_store_satisfies_contract() {
        let mut store = ConfigStore::default();
        seed_database(&mut store);
        check_database(&store);
    }

    #[test]
    fn test_shared_config_satisfies_contract() {
        let mut shared = SharedConfig::default();
        seed_database(&mut shared);
        check_database(&shared);
    }

    #[test]
    fn test_merge_with_through_trait_object() {
        let mut store = ConfigStore::default();
        store.set("limits.rps", 10).unwrap();
        let config: &dyn ConfigContract = &store;

        let defaults = match json!({"rps": 100}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let merged = config.merge_with("limits", defaults, &|conflict: &MergeConflict<'_>| {
            Some(conflict.default.clone())
        });
        assert_eq!(merged.get("rps"), Some(&json!(100)));
    }
}
