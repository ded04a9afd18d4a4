//! In-memory configuration store addressed by dot-delimited keys.
//!
//! Responsibilities:
//! - Resolve keys against the configuration tree (`get`, `get_or`, `has`, `get_as`).
//! - Write values at keys, creating intermediate nodes (`set`, `set_serialized`).
//! - Seed values without clobbering existing ones (`defaults`, `fill_defaults`).
//! - Compute merged views of a subtree with a set of defaults (`merge`, `merge_with`).
//!
//! Does NOT handle:
//! - Synchronization between threads (see `shared.rs`).
//! - Layering of files and environment variables (see `loader`).
//!
//! Invariants:
//! - The root is always a mapping.
//! - Reads never mutate the tree. A malformed key reads as absent.
//! - `merge` and `merge_with` are pure views; they never write back.
//! - Writes replace scalars found along the path with mappings.
//! - A numeric segment indexes a sequence only if that sequence already exists.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::MAX_SEQUENCE_PADDING;
use crate::error::ConfigError;
use crate::merge::{MergeConflict, keep_existing, merge_mappings};
use crate::path::{KeyPath, as_index};
use crate::persistence::write_config_file;
use crate::value::{Mapping, Value, kind_name};

/// A tree of configuration values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    tree: Mapping,
}

impl ConfigStore {
    /// Create a store from an initial mapping.
    pub fn new(tree: Mapping) -> Self {
        Self { tree }
    }

    /// Create a store from any value whose root is a mapping.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRoot` if `value` is not a mapping.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(tree) => Ok(Self::new(tree)),
            other => Err(ConfigError::InvalidRoot {
                found: kind_name(&other),
            }),
        }
    }

    /// Create a store from a JSON document whose root is an object.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidJson` for malformed input and
    /// `ConfigError::InvalidRoot` if the document is not an object.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json).map_err(ConfigError::InvalidJson)?;
        Self::from_value(value)
    }

    /// Value at `key`, or `None` if nothing is stored there.
    ///
    /// A stored `null` is returned as `Some(&Value::Null)`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let path = KeyPath::parse(key).ok()?;
        lookup(&self.tree, &path)
    }

    /// Value at `key`, or `default` if nothing is stored there.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        match self.get(key) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Whether a value (including `null`) is stored at `key`.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Deserialize the value at `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored there.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Deserialize` if the stored value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        self.get(key)
            .map(|value| {
                T::deserialize(value).map_err(|source| ConfigError::Deserialize {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Write `value` at `key`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` if the key is malformed.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let path = KeyPath::parse(key)?;
        *slot(&mut self.tree, &path) = value.into();
        tracing::trace!(key, "config value set");
        Ok(())
    }

    /// Serialize `value` and write it at `key`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails, otherwise the
    /// same errors as [`ConfigStore::set`].
    pub fn set_serialized<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), ConfigError> {
        let value = serde_json::to_value(value).map_err(|source| ConfigError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.set(key, value)
    }

    /// Write `value` at `key` only if nothing is stored there yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` if the key is malformed.
    pub fn defaults(&mut self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let path = KeyPath::parse(key)?;
        if lookup(&self.tree, &path).is_some() {
            tracing::debug!(key, "value already present, default not applied");
            return Ok(());
        }
        *slot(&mut self.tree, &path) = value.into();
        Ok(())
    }

    /// Deep-fill `key` with `value` and write the result back.
    ///
    /// Absent keys behave like [`ConfigStore::set`]. When both the existing
    /// value and `value` are mappings, nested keys missing from the existing
    /// mapping are filled in. Any other existing value is kept as is.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` if the key is malformed.
    pub fn fill_defaults(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<(), ConfigError> {
        let path = KeyPath::parse(key)?;
        let value: Value = value.into();
        let filled = match (lookup(&self.tree, &path), value) {
            (None, value) => value,
            (Some(Value::Object(existing)), Value::Object(defaults)) => {
                Value::Object(merge_mappings(existing, defaults, &keep_existing, key))
            }
            (Some(existing), _) => {
                tracing::debug!(
                    key,
                    found = kind_name(existing),
                    "existing value is not a mapping, defaults not applied"
                );
                return Ok(());
            }
        };
        *slot(&mut self.tree, &path) = filled;
        Ok(())
    }

    /// Merge the mapping at `key` over `defaults`, existing values winning.
    ///
    /// Nothing stored at `key` yields `defaults` unchanged. The store is not
    /// modified; use [`ConfigStore::fill_defaults`] to persist a merge.
    pub fn merge(&self, key: &str, defaults: Mapping) -> Mapping {
        self.merge_with(key, defaults, keep_existing)
    }

    /// Like [`ConfigStore::merge`], with `customizer` deciding conflicts.
    ///
    /// The customizer is called for every key present on both sides. It
    /// returns `Some(value)` to choose the combined value or `None` to fall
    /// back to the default rule.
    pub fn merge_with<F>(&self, key: &str, defaults: Mapping, customizer: F) -> Mapping
    where
        F: Fn(&MergeConflict<'_>) -> Option<Value>,
    {
        merge_target(key, self.get(key), defaults, &customizer)
    }

    /// The whole tree.
    pub fn as_mapping(&self) -> &Mapping {
        &self.tree
    }

    /// Consume the store, returning the tree.
    pub fn into_mapping(self) -> Mapping {
        self.tree
    }

    /// Consume the store, returning the tree as a `Value::Object`.
    pub fn into_value(self) -> Value {
        Value::Object(self.tree)
    }

    /// Write the tree to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigFileWrite` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        write_config_file(path, &self.tree)?;
        Ok(())
    }
}

impl From<Mapping> for ConfigStore {
    fn from(tree: Mapping) -> Self {
        Self::new(tree)
    }
}

fn lookup<'a>(tree: &'a Mapping, path: &KeyPath) -> Option<&'a Value> {
    let mut node = tree.get(path.head())?;
    for segment in path.tail() {
        node = child(node, segment)?;
    }
    Some(node)
}

fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => as_index(segment).and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Mutable slot for `path`, creating containers along the way.
fn slot<'a>(tree: &'a mut Mapping, path: &KeyPath) -> &'a mut Value {
    let mut node = tree.entry(path.head()).or_insert(Value::Null);
    for segment in path.tail() {
        node = descend(node, segment);
    }
    node
}

/// Step into `segment`, replacing `node` with a mapping when it cannot hold it.
///
/// An index segment only addresses an element of a sequence that already
/// exists and reaches at most `MAX_SEQUENCE_PADDING` past its end. Everywhere
/// else a numeric segment is an ordinary mapping key.
fn descend<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    let index = as_index(segment);
    let holds = match (&*node, index) {
        (Value::Object(_), _) => true,
        (Value::Array(items), Some(index)) => index <= items.len() + MAX_SEQUENCE_PADDING,
        _ => false,
    };
    if !holds {
        *node = Value::Object(Mapping::new());
        return descend(node, segment);
    }
    match (node, index) {
        (Value::Object(map), _) => map.entry(segment).or_insert(Value::Null),
        (Value::Array(items), Some(index)) => {
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            &mut items[index]
        }
        _ => unreachable!("`holds` admits only mappings and in-range sequences"),
    }
}

/// Merge the value found at `key` over `defaults`.
pub(crate) fn merge_target<F>(
    key: &str,
    target: Option<&Value>,
    defaults: Mapping,
    customizer: &F,
) -> Mapping
where
    F: Fn(&MergeConflict<'_>) -> Option<Value> + ?Sized,
{
    match target {
        Some(Value::Object(existing)) => merge_mappings(existing, defaults, customizer, key),
        Some(other) => {
            tracing::warn!(
                key,
                found = kind_name(other),
                "merge target is not a mapping, returning defaults"
            );
            defaults
        }
        None => defaults,
    }
}
