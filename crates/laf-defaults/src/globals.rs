//! Global (wildcard) overrides.
//!
//! A key of the form `*.suffix` sets every key whose last dot segment is
//! `suffix`:
//!
//! ```text
//! *.background       = @panelBackground
//! Button.background  = 111111   # replaced by the global
//! Tree.row.background= 222222   # replaced as well
//! Button.foreground  = 333333   # untouched
//! ```
//!
//! [`expand`] pulls the global entries out of the key space, resolves and
//! coerces their values, and rewrites the matching ordinary entries. Globals
//! only ever replace values; they never create keys.

use std::collections::BTreeMap;

use crate::coerce::coerce;
use crate::properties::{global_suffix, is_variable_key, last_segment, RawProperties};
use crate::resolve::resolve;
use crate::value::ResolvedValue;

/// A single global override.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GlobalEntry {
    /// The value after variable resolution, before coercion.
    resolved: String,
    value: ResolvedValue,
}

/// Global overrides keyed by bare suffix (`background`, not `*.background`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOverrides {
    entries: BTreeMap<String, GlobalEntry>,
}

impl GlobalOverrides {
    /// Returns the override registered for a bare suffix.
    pub fn get(&self, suffix: &str) -> Option<&ResolvedValue> {
        self.entries.get(suffix).map(|entry| &entry.value)
    }

    /// Returns the override that applies to a full key, if any.
    ///
    /// Keys without a dot never match.
    ///
    /// ```rust
    /// use laf_defaults::{globals::expand, properties::RawProperties, ResolvedValue};
    ///
    /// let raw: RawProperties = [("*.arc", "6")].into_iter().collect();
    /// let globals = expand(raw).globals;
    ///
    /// assert_eq!(globals.for_key("Button.arc"), Some(&ResolvedValue::Integer(6)));
    /// assert_eq!(globals.for_key("arc"), None);
    /// ```
    pub fn for_key(&self, key: &str) -> Option<&ResolvedValue> {
        last_segment(key).and_then(|suffix| self.get(suffix))
    }

    fn resolved_for_key(&self, key: &str) -> Option<&str> {
        last_segment(key)
            .and_then(|suffix| self.entries.get(suffix))
            .map(|entry| entry.resolved.as_str())
    }

    /// Iterates over `(suffix, value)` pairs in suffix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.entries
            .iter()
            .map(|(suffix, entry)| (suffix.as_str(), &entry.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of [`expand`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// The property set with global keys removed and matching keys rewritten.
    pub properties: RawProperties,
    /// The extracted overrides.
    pub globals: GlobalOverrides,
}

/// Extracts global overrides from `raw` and applies them to its ordinary keys.
///
/// Global values are resolved against the full set, variables included. A
/// global whose value loops back on itself is dropped and overrides nothing.
/// Variable keys (`@name`) are never rewritten, even when their last segment
/// matches a global, so a key referencing `@panel.background` sees the
/// variable's own value rather than the `*.background` override.
///
/// # Example
///
/// ```rust
/// use laf_defaults::{globals::expand, properties::RawProperties};
///
/// let raw: RawProperties = [
///     ("@accent", "4A88C7"),
///     ("*.focusColor", "@accent"),
///     ("Button.focusColor", "000000"),
///     ("Button.arc", "6"),
/// ]
/// .into_iter()
/// .collect();
///
/// let expansion = expand(raw);
/// assert_eq!(expansion.properties.get("Button.focusColor"), Some("4A88C7"));
/// assert_eq!(expansion.properties.get("Button.arc"), Some("6"));
/// assert!(!expansion.properties.contains_key("*.focusColor"));
/// ```
pub fn expand(raw: RawProperties) -> Expansion {
    let mut globals = GlobalOverrides::default();

    for (key, value) in raw.iter() {
        let Some(suffix) = global_suffix(key) else {
            continue;
        };
        if suffix.is_empty() {
            tracing::debug!(key, "ignoring global override without a suffix");
            continue;
        }

        match resolve(&raw, value) {
            Ok(resolved) => {
                let value = coerce(&resolved);
                globals
                    .entries
                    .insert(suffix.to_string(), GlobalEntry { resolved, value });
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "dropping global override");
            }
        }
    }

    let properties = raw
        .into_iter()
        .filter(|(key, _)| global_suffix(key).is_none())
        .map(|(key, value)| {
            if is_variable_key(&key) {
                return (key, value);
            }
            match globals.resolved_for_key(&key) {
                Some(resolved) => (key, resolved.to_string()),
                None => (key, value),
            }
        })
        .collect();

    Expansion {
        properties,
        globals,
    }
}
