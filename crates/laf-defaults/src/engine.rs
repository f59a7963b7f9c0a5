//! Defaults table assembly.
//!
//! One pass turns a theme identity and a base table into a fresh table:
//!
//! 1. [`load`] the theme set merged over the parent set
//! 2. [`expand`] global overrides
//! 3. apply the globals to matching dotted keys already in the base
//! 4. resolve and coerce every ordinary key, overwriting base entries
//!
//! If loading fails the pass is abandoned and a copy of the base is returned.
//! A key whose reference chain loops is skipped, so its base value survives.

use crate::coerce::coerce;
use crate::error::LoadError;
use crate::globals::{expand, Expansion, GlobalOverrides};
use crate::loader::load;
use crate::properties::{is_variable_key, RawProperties};
use crate::resolve::resolve;
use crate::source::ResourceLocator;
use crate::table::DefaultsTable;
use crate::theme::ThemeIdentity;

/// Builds the defaults table for `identity` on top of `base`.
///
/// Never fails: a read error is logged and the base is returned unchanged.
///
/// # Example
///
/// ```rust
/// use laf_defaults::{build_defaults, DefaultsTable, EmbeddedLocator, Rgb, ThemeIdentity};
///
/// let locator = EmbeddedLocator::from_entries(&[
///     ("laf/core/Laf.properties", "@accent = 4A88C7\nButton.focusColor = @accent"),
///     ("acme/Flat.properties", "Button.arc = 0"),
/// ]);
/// let base = DefaultsTable::new().with("Button.font", "Dialog");
///
/// let table = build_defaults(
///     &locator,
///     &ThemeIdentity::parent(),
///     &ThemeIdentity::new("acme.Flat"),
///     &base,
/// );
///
/// assert_eq!(table.color("Button.focusColor"), Some(Rgb::new(0x4A88C7)));
/// assert_eq!(table.integer("Button.arc"), Some(0));
/// assert_eq!(table.text("Button.font"), Some("Dialog"));
/// assert!(!table.contains_key("@accent"));
/// ```
pub fn build_defaults<L>(
    locator: &L,
    parent: &ThemeIdentity,
    identity: &ThemeIdentity,
    base: &DefaultsTable,
) -> DefaultsTable
where
    L: ResourceLocator + ?Sized,
{
    let raw = match load(locator, parent, identity) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::error!(theme = %identity, error = %err, "failed to load theme, keeping base defaults");
            return base.clone();
        }
    };

    let table = assemble(raw, base);
    tracing::debug!(theme = %identity, entries = table.len(), "built defaults table");
    table
}

/// Runs expansion, resolution and coercion over an already-loaded set.
fn assemble(raw: RawProperties, base: &DefaultsTable) -> DefaultsTable {
    let Expansion {
        properties,
        globals,
    } = expand(raw);

    let mut table = base.clone();
    apply_globals(&mut table, &globals);

    for (key, value) in properties.iter() {
        if is_variable_key(key) {
            continue;
        }
        match resolve(&properties, value) {
            Ok(resolved) => table.put(key.to_string(), coerce(&resolved)),
            Err(err) => {
                tracing::warn!(key, error = %err, "skipping key with cyclic reference");
            }
        }
    }

    table
}

/// Rewrites base entries whose last segment names a global override.
fn apply_globals(table: &mut DefaultsTable, globals: &GlobalOverrides) {
    if globals.is_empty() {
        return;
    }
    for (key, value) in table.iter_mut() {
        if let Some(global) = globals.for_key(key) {
            *value = global.clone();
        }
    }
}

/// A configured resolution engine: a locator plus the parent identity.
///
/// ```rust
/// use laf_defaults::{builtin, DefaultsEngine, DefaultsTable, ThemeIdentity};
///
/// let engine = DefaultsEngine::new(builtin::locator());
/// let table = engine.build_defaults(
///     &ThemeIdentity::new("laf.core.DarkLaf"),
///     &DefaultsTable::new(),
/// );
/// assert!(table.color("Panel.background").is_some());
/// ```
pub struct DefaultsEngine {
    locator: Box<dyn ResourceLocator + Send + Sync>,
    parent: ThemeIdentity,
}

impl DefaultsEngine {
    /// Creates an engine over `locator` with the default parent identity.
    pub fn new<L>(locator: L) -> Self
    where
        L: ResourceLocator + Send + Sync + 'static,
    {
        Self {
            locator: Box::new(locator),
            parent: ThemeIdentity::parent(),
        }
    }

    /// Replaces the parent identity.
    pub fn with_parent(mut self, parent: impl Into<ThemeIdentity>) -> Self {
        self.parent = parent.into();
        self
    }

    pub fn parent(&self) -> &ThemeIdentity {
        &self.parent
    }

    pub fn locator(&self) -> &(dyn ResourceLocator + Send + Sync) {
        self.locator.as_ref()
    }

    /// Loads the merged raw properties for `identity`, before expansion.
    pub fn load(&self, identity: &ThemeIdentity) -> Result<RawProperties, LoadError> {
        load(self.locator.as_ref(), &self.parent, identity)
    }

    /// Builds the defaults table for `identity` on top of `base`.
    pub fn build_defaults(&self, identity: &ThemeIdentity, base: &DefaultsTable) -> DefaultsTable {
        build_defaults(self.locator.as_ref(), &self.parent, identity, base)
    }
}

impl std::fmt::Debug for DefaultsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultsEngine")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EmbeddedLocator;
    use crate::value::{ResolvedValue, Rgb};
    use std::io;

    struct FailingLocator;

    impl ResourceLocator for FailingLocator {
        fn open(&self, _name: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn props(entries: &[(&str, &str)]) -> RawProperties {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_variables_and_globals_not_in_table() {
        let table = assemble(
            props(&[
                ("@accent", "4A88C7"),
                ("*.focusColor", "@accent"),
                ("Button.focusColor", "000000"),
            ]),
            &DefaultsTable::new(),
        );

        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["Button.focusColor"]);
        assert_eq!(table.color("Button.focusColor"), Some(Rgb::new(0x4A88C7)));
    }

    #[test]
    fn test_globals_rewrite_base_keys_without_adding() {
        let base = DefaultsTable::new()
            .with("Menu.background", Rgb::new(0xFFFFFF))
            .with("Menu.foreground", Rgb::new(0x000000))
            .with("background", Rgb::new(0x123123));

        let table = assemble(props(&[("*.background", "2B2B2B")]), &base);

        assert_eq!(table.color("Menu.background"), Some(Rgb::new(0x2B2B2B)));
        assert_eq!(table.color("Menu.foreground"), Some(Rgb::new(0x000000)));
        assert_eq!(table.color("background"), Some(Rgb::new(0x123123)));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_properties_overwrite_base() {
        let base = DefaultsTable::new().with("Button.arc", 4).with("Button.font", "Dialog");
        let table = assemble(props(&[("Button.arc", "8")]), &base);

        assert_eq!(table.integer("Button.arc"), Some(8));
        assert_eq!(table.text("Button.font"), Some("Dialog"));
    }

    #[test]
    fn test_cyclic_key_keeps_base_value() {
        let base = DefaultsTable::new().with("a.key", 1);
        let table = assemble(
            props(&[("a.key", "@b.key"), ("b.key", "@a.key"), ("c.key", "3")]),
            &base,
        );

        assert_eq!(table.integer("a.key"), Some(1));
        assert!(!table.contains_key("b.key"));
        assert_eq!(table.integer("c.key"), Some(3));
    }

    #[test]
    fn test_dangling_reference_is_text() {
        let table = assemble(props(&[("c.key", "@missing.key")]), &DefaultsTable::new());
        assert_eq!(
            table.get("c.key"),
            Some(&ResolvedValue::Text("@missing.key".into()))
        );
    }

    #[test]
    fn test_load_failure_returns_base() {
        let base = DefaultsTable::new().with("Button.arc", 4);
        let table = build_defaults(
            &FailingLocator,
            &ThemeIdentity::parent(),
            &ThemeIdentity::new("acme.Flat"),
            &base,
        );
        assert_eq!(table, base);
    }

    #[test]
    fn test_engine_with_parent() {
        let locator = EmbeddedLocator::from_entries(&[
            ("acme/Base.properties", "Button.arc = 2"),
            ("acme/Flat.properties", "Button.font = Inter"),
        ]);
        let engine = DefaultsEngine::new(locator).with_parent("acme.Base");

        let table = engine.build_defaults(&ThemeIdentity::new("acme.Flat"), &DefaultsTable::new());

        assert_eq!(engine.parent().name(), "acme.Base");
        assert_eq!(table.integer("Button.arc"), Some(2));
        assert_eq!(table.text("Button.font"), Some("Inter"));
    }

    #[test]
    fn test_engine_load_exposes_raw_set() {
        let locator = EmbeddedLocator::from_entries(&[(
            "laf/core/Laf.properties",
            "@accent = 4A88C7\n*.arc = 6",
        )]);
        let engine = DefaultsEngine::new(locator);

        let raw = engine.load(&ThemeIdentity::parent()).unwrap();
        assert_eq!(raw.get("@accent"), Some("4A88C7"));
        assert_eq!(raw.get("*.arc"), Some("6"));
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DefaultsEngine>();
    }
}
