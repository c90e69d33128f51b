//! Per-node option store.
//!
//! Options attach backend- or pass-specific metadata to a node without changing the node
//! schema. Values are untyped from this crate's point of view.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

/// A dynamically typed option value.
///
/// Any JSON value is legal: numbers, strings, booleans, `null`, arrays and nested objects.
pub type OptionValue = serde_json::Value;

/// Key/value extension metadata attached to a query node.
///
/// Keys are unique and kept sorted, so iteration and rendering order never depend on the order
/// in which options were set. A key that was never set (`get` returns `None`) is distinct from
/// a key explicitly set to `null` (`get` returns `Some(&Value::Null)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, OptionValue>);

impl Options {
    /// Creates an empty option store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, or `None` if the key was never set.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    /// Returns true if `key` has been set, including to `null`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of stored options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no options are stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in lexicographic key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, OptionValue> {
        self.0.iter()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns a copy of this store with `key` mapped to `value`.
    ///
    /// The receiver is left unchanged; the returned store shares nothing with it.
    pub fn with(&self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        let mut copy = self.clone();
        copy.insert(key, value);
        copy
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = btree_map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
