//! Deep merge of configuration mappings.
//!
//! Responsibilities:
//! - Combine an existing mapping with a mapping of default values.
//! - Consult a caller-supplied customizer for keys present on both sides.
//!
//! Does NOT handle:
//! - Looking up or writing the mapping in a store (see `store.rs`).
//!
//! Invariants:
//! - The result contains every key from both sides.
//! - Without a customizer decision, the existing value wins; two mappings
//!   merge recursively; sequences are leaves and never merged element-wise.
//! - The customizer sees a conflict before recursion, so it may resolve a
//!   whole subtree at once.

use crate::path::join;
use crate::value::{Mapping, Value};

/// A key present both in the existing configuration and in the defaults.
#[derive(Debug, Clone, Copy)]
pub struct MergeConflict<'a> {
    /// Full dotted key of the conflicting entry.
    pub key: &'a str,
    /// Value already held by the configuration.
    pub existing: &'a Value,
    /// Value offered by the defaults.
    pub default: &'a Value,
}

/// Customizer that never decides, leaving every conflict to the default rule.
pub fn keep_existing(_conflict: &MergeConflict<'_>) -> Option<Value> {
    None
}

/// Merge `existing` over `defaults`.
///
/// `prefix` is the dotted key of the mapping being merged, used to build the
/// full key handed to the customizer. Pass `""` for the root.
pub fn merge_mappings<F>(
    existing: &Mapping,
    defaults: Mapping,
    customizer: &F,
    prefix: &str,
) -> Mapping
where
    F: Fn(&MergeConflict<'_>) -> Option<Value> + ?Sized,
{
    let mut merged = defaults;
    for (name, existing_value) in existing {
        let combined = match merged.remove(name) {
            None => existing_value.clone(),
            Some(default_value) => {
                resolve(&join(prefix, name), existing_value, default_value, customizer)
            }
        };
        merged.insert(name.clone(), combined);
    }
    merged
}

fn resolve<F>(key: &str, existing: &Value, default: Value, customizer: &F) -> Value
where
    F: Fn(&MergeConflict<'_>) -> Option<Value> + ?Sized,
{
    let conflict = MergeConflict {
        key,
        existing,
        default: &default,
    };
    if let Some(chosen) = customizer(&conflict) {
        return chosen;
    }

    match (existing, default) {
        (Value::Object(existing_map), Value::Object(default_map)) => {
            Value::Object(merge_mappings(existing_map, default_map, customizer, key))
        }
        (existing, _) => existing.clone(),
    }
}
