//! The assembled defaults table.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::{ResolvedValue, Rgb};

/// Mapping from property key to typed default value.
///
/// A table is built up front, either by the host as the base look-and-feel or
/// by [`build_defaults`](crate::build_defaults), and is read-only afterwards.
///
/// ```rust
/// use laf_defaults::{DefaultsTable, Rgb};
///
/// let base = DefaultsTable::new()
///     .with("Button.background", Rgb::new(0xEEEEEE))
///     .with("Button.arc", 4)
///     .with("Button.font", "Dialog");
///
/// assert_eq!(base.color("Button.background"), Some(Rgb::new(0xEEEEEE)));
/// assert_eq!(base.integer("Button.arc"), Some(4));
/// assert_eq!(base.text("Button.font"), Some("Dialog"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefaultsTable {
    entries: BTreeMap<String, ResolvedValue>,
}

impl DefaultsTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ResolvedValue>) -> Self {
        self.put(key.into(), value.into());
        self
    }

    pub(crate) fn put(&mut self, key: String, value: ResolvedValue) {
        self.entries.insert(key, value);
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut ResolvedValue)> {
        self.entries
            .iter_mut()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn get(&self, key: &str) -> Option<&ResolvedValue> {
        self.entries.get(key)
    }

    /// Returns the value under `key` if it is a color.
    pub fn color(&self, key: &str) -> Option<Rgb> {
        self.get(key).and_then(ResolvedValue::as_color)
    }

    /// Returns the value under `key` if it is an integer.
    pub fn integer(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(ResolvedValue::as_integer)
    }

    /// Returns the value under `key` if it is text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ResolvedValue::as_text)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for DefaultsTable
where
    K: Into<String>,
    V: Into<ResolvedValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for DefaultsTable {
    type Item = (String, ResolvedValue);
    type IntoIter = btree_map::IntoIter<String, ResolvedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
