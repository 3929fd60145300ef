//! Property databases and the substitution engine
//!
//! This module is organized into submodules:
//! - loader: `boards.txt` / `platform.txt` parsing with board-tag scoping
//! - fallback: canonical aliases for board keys that vary by suffix
//! - expand: fixed-point `{key}` template expansion
//! - writer: `key=value` serialization of the resolved output
//!
//! Every database is a [`PropertyMap`], which keeps keys in first-seen order.
//! Suffix fallback ("first match wins") and duplicate handling ("last write
//! wins") both depend on that order.

use std::collections::HashMap;

pub mod expand;
pub mod fallback;
pub mod loader;
pub mod writer;

pub use expand::{ExpandOptions, ExpansionReport, UnresolvedPolicy, expand};
pub use fallback::alias_first_matching_suffix;
pub use loader::load;
pub use writer::write;

/// Insertion-ordered string to string mapping
///
/// Re-inserting an existing key replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl PropertyMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or overwrite a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Insert every entry of `other` in its order, overwriting existing keys
    pub fn extend(&mut self, other: &PropertyMap) {
        for (key, value) in other {
            self.insert(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(entry_as_strs)
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Mutable access to `(key, value)` pairs in order; keys stay read-only
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut String)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }
}

fn entry_as_strs(entry: &(String, String)) -> (&str, &str) {
    (entry.0.as_str(), entry.1.as_str())
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(entry_as_strs as fn(&'a (String, String)) -> (&'a str, &'a str))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
