//! Property-based tests for the configuration store.
//!
//! These tests verify the read/write laws of the store using randomly
//! generated keys and values.
//!
//! Test coverage:
//! - set then get returns the written value
//! - get on an unwritten key falls back to the supplied default
//! - defaults on an absent key behaves like set; on a present key it is a no-op
//! - merge with nothing stored yields the defaults; merge never mutates the store

use dotcfg_config::{ConfigStore, Mapping, Value};
use proptest::prelude::*;
use serde_json::json;

/// Strategy for key paths of one to four segments, named or numeric.
fn key_strategy() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        3 => "[a-z][a-z0-9_]{0,7}",
        1 => "0|[1-9][0-9]{0,4}",
    ];
    prop::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("."))
}

/// Strategy for leaf values.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ._-]{0,16}".prop_map(Value::String),
    ]
}

/// Strategy for arbitrary values, including nested sequences and mappings.
fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

/// Strategy for a flat mapping of defaults.
fn mapping_strategy() -> impl Strategy<Value = Mapping> {
    prop::collection::btree_map("[a-z]{1,6}", scalar_strategy(), 0..6)
        .prop_map(|map| map.into_iter().collect())
}

/// Strategy for a store seeded with a handful of writes.
fn store_strategy() -> impl Strategy<Value = ConfigStore> {
    prop::collection::vec((key_strategy(), value_strategy()), 0..6).prop_map(|writes| {
        let mut store = ConfigStore::default();
        for (key, value) in writes {
            store.set(&key, value).unwrap();
        }
        store
    })
}

proptest! {
    #[test]
    fn prop_set_then_get_roundtrips(
        mut store in store_strategy(),
        key in key_strategy(),
        value in value_strategy(),
    ) {
        store.set(&key, value.clone()).unwrap();
        prop_assert_eq!(store.get(&key), Some(&value));
    }

    #[test]
    fn prop_unwritten_key_uses_default(key in key_strategy(), default in scalar_strategy()) {
        let store = ConfigStore::default();
        prop_assert!(store.get(&key).is_none());
        prop_assert_eq!(store.get_or(&key, default.clone()), default);
    }

    #[test]
    fn prop_defaults_on_absent_behaves_like_set(
        store in store_strategy(),
        key in key_strategy(),
        value in value_strategy(),
    ) {
        prop_assume!(!store.has(&key));

        let mut via_defaults = store.clone();
        via_defaults.defaults(&key, value.clone()).unwrap();

        let mut via_set = store;
        via_set.set(&key, value).unwrap();

        prop_assert_eq!(via_defaults, via_set);
    }

    #[test]
    fn prop_defaults_on_present_is_noop(
        mut store in store_strategy(),
        key in key_strategy(),
        existing in value_strategy(),
        value in value_strategy(),
    ) {
        store.set(&key, existing).unwrap();
        let before = store.clone();

        store.defaults(&key, value).unwrap();
        prop_assert_eq!(store, before);
    }

    #[test]
    fn prop_merge_absent_yields_defaults(key in key_strategy(), defaults in mapping_strategy()) {
        let store = ConfigStore::default();
        prop_assert_eq!(store.merge(&key, defaults.clone()), defaults);
    }

    #[test]
    fn prop_merge_contains_every_key_and_does_not_mutate(
        mut store in store_strategy(),
        key in key_strategy(),
        existing in mapping_strategy(),
        defaults in mapping_strategy(),
    ) {
        store.set(&key, Value::Object(existing.clone())).unwrap();
        let before = store.clone();

        let merged = store.merge(&key, defaults.clone());

        prop_assert_eq!(&store, &before);
        for (name, value) in &existing {
            prop_assert_eq!(merged.get(name), Some(value));
        }
        for name in defaults.keys() {
            prop_assert!(merged.contains_key(name));
        }
        prop_assert_eq!(
            merged.len(),
            existing.keys().chain(defaults.keys()).collect::<std::collections::BTreeSet<_>>().len()
        );
    }
}
