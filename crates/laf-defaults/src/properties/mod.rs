//! Raw property sets as read from property files.
//!
//! A [`RawProperties`] holds the unresolved, uncoerced `key -> value` strings of
//! one or more merged sources. Keys are dot-delimited paths such as
//! `Button.background`; two prefixes are reserved:
//!
//! | Prefix | Meaning |
//! |--------|---------|
//! | `@`    | variable: the key is only a reference target, never a default |
//! | `*.`   | global override: applies to every key ending in the suffix |
//!
//! The map is ordered so that every pass over it is deterministic.

mod parser;

pub use parser::parse_properties;

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Prefix marking a value (or key) as a variable reference.
pub const VARIABLE_PREFIX: &str = "@";

/// Prefix marking a key as a global override.
pub const GLOBAL_PREFIX: &str = "*.";

/// Returns the final dot-delimited segment of a key, if the key has a dot.
///
/// ```rust
/// use laf_defaults::properties::last_segment;
///
/// assert_eq!(last_segment("Button.background"), Some("background"));
/// assert_eq!(last_segment("Tree.leaf.icon"), Some("icon"));
/// assert_eq!(last_segment("control"), None);
/// ```
pub fn last_segment(key: &str) -> Option<&str> {
    key.rfind('.').map(|idx| &key[idx + 1..])
}

/// Returns true if `key` names a variable rather than a default.
pub fn is_variable_key(key: &str) -> bool {
    key.starts_with(VARIABLE_PREFIX)
}

/// Returns the suffix of a global override key, or `None` for ordinary keys.
pub fn global_suffix(key: &str) -> Option<&str> {
    key.strip_prefix(GLOBAL_PREFIX)
}

/// Strips leading and trailing space and ASCII control characters.
///
/// Non-ASCII whitespace such as U+00A0 or U+3000 is content and is kept.
pub(crate) fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// An ordered mapping from property key to raw string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProperties {
    entries: BTreeMap<String, String>,
}

impl RawProperties {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses property-file text into a new set.
    ///
    /// See [`parse_properties`] for the accepted syntax.
    pub fn parse(text: &str) -> Self {
        parse_properties(text)
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &str)> {
        self.entries
            .get_key_value(key)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Copies every entry of `parent` whose key is not already present.
    ///
    /// Entries already in `self` always win; this is how a theme set is
    /// layered over its shared parent set.
    pub fn overlay_missing(&mut self, parent: RawProperties) {
        for (key, value) in parent.entries {
            self.entries.entry(key).or_insert(value);
        }
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for RawProperties {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
