//! Variable reference resolution.
//!
//! A value starting with `@` refers to another property. The reference is
//! followed until a value without the marker is reached:
//!
//! ```text
//! @accent           = 4A88C7
//! @selection        = @accent
//! List.selection    = @selection     # resolves to 4A88C7
//! Tree.selection    = @List.selection # resolves to 4A88C7
//! ```
//!
//! # Lookup
//!
//! The whole reference, marker included, is tried as a key first, so
//! `@selection` finds the variable `@selection`. If no such key exists the
//! marker is dropped and the plain key is tried, so `@List.selection` finds
//! the ordinary key `List.selection`.
//!
//! # Dangling references
//!
//! A reference that cannot be followed is returned as literal text: resolving
//! `@missing` yields `"@missing"`. It is not an error.
//!
//! # Cycles
//!
//! Every followed key is recorded. Reaching a key a second time returns
//! [`ResolveError::CyclicReference`] with the full chain instead of recursing
//! forever.

use std::collections::HashSet;

use crate::error::ResolveError;
use crate::properties::{RawProperties, VARIABLE_PREFIX};

/// Resolves `value` against `raw`, following references until a concrete value.
///
/// Values that are not references are returned unchanged.
///
/// # Errors
///
/// Returns [`ResolveError::CyclicReference`] if the reference chain loops.
///
/// # Example
///
/// ```rust
/// use laf_defaults::{properties::RawProperties, resolve};
///
/// let raw: RawProperties = [
///     ("a.key", "@b.key"),
///     ("b.key", "10"),
///     ("c.key", "@missing.key"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(resolve(&raw, "@b.key").unwrap(), "10");
/// assert_eq!(resolve(&raw, "@missing.key").unwrap(), "@missing.key");
/// assert_eq!(resolve(&raw, "plain").unwrap(), "plain");
/// ```
pub fn resolve(raw: &RawProperties, value: &str) -> Result<String, ResolveError> {
    let mut visited = HashSet::new();
    let mut chain = Vec::new();
    let mut current = value;

    loop {
        let Some(target) = current.strip_prefix(VARIABLE_PREFIX) else {
            return Ok(current.to_string());
        };

        let (key, next) = match lookup(raw, current, target) {
            Some(found) => found,
            None => return Ok(current.to_string()),
        };

        chain.push(key.to_string());
        if !visited.insert(key) {
            return Err(ResolveError::CyclicReference { chain });
        }

        current = next;
    }
}

/// Finds the key a reference points at and its raw value.
///
/// `reference` is the full reference (`@name`), `target` the part after the marker.
fn lookup<'a>(raw: &'a RawProperties, reference: &str, target: &str) -> Option<(&'a str, &'a str)> {
    [reference, target]
        .into_iter()
        .find_map(|key| raw.get_key_value(key))
}

/// Returns true if `value` is a reference that can be followed at least one step.
pub fn is_resolvable(raw: &RawProperties, value: &str) -> bool {
    value
        .strip_prefix(VARIABLE_PREFIX)
        .is_some_and(|target| lookup(raw, value, target).is_some())
}
