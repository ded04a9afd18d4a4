//! Thread-safe configuration handle.
//!
//! Responsibilities:
//! - Share one `ConfigStore` between threads behind a single `RwLock`.
//! - Hand out owned values so no lock guard escapes a call.
//!
//! Invariants:
//! - Any number of concurrent readers, or exactly one writer.
//! - A poisoned lock is recovered; every store operation leaves the tree valid.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;

use crate::error::ConfigError;
use crate::merge::{MergeConflict, keep_existing};
use crate::store::{ConfigStore, merge_target};
use crate::value::{Mapping, Value};

/// Cloneable handle to a configuration store shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<ConfigStore>>,
}

impl SharedConfig {
    pub fn new(store: ConfigStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ConfigStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConfigStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone of the value at `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        self.read().get_or(key, default)
    }

    pub fn has(&self, key: &str) -> bool {
        self.read().has(key)
    }

    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        self.read().get_as(key)
    }

    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        self.write().set(key, value)
    }

    pub fn defaults(&self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        self.write().defaults(key, value)
    }

    pub fn fill_defaults(&self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        self.write().fill_defaults(key, value)
    }

    pub fn merge(&self, key: &str, defaults: Mapping) -> Mapping {
        self.merge_with(key, defaults, keep_existing)
    }

    /// Merged view of the value at `key` as of the call.
    ///
    /// The target is cloned out under the read lock and the customizer runs
    /// after the lock is released, so it may call back into this handle.
    pub fn merge_with<F>(&self, key: &str, defaults: Mapping, customizer: F) -> Mapping
    where
        F: Fn(&MergeConflict<'_>) -> Option<Value>,
    {
        let target = self.get(key);
        merge_target(key, target.as_ref(), defaults, &customizer)
    }

    /// Run several operations under one write lock.
    pub fn update<R>(&self, f: impl FnOnce(&mut ConfigStore) -> R) -> R {
        f(&mut self.write())
    }

    /// Point-in-time copy of the whole store.
    pub fn snapshot(&self) -> ConfigStore {
        self.read().clone()
    }
}

impl From<ConfigStore> for SharedConfig {
    fn from(store: ConfigStore) -> Self {
        Self::new(store)
    }
}
