//! Loading a theme's property set together with the shared parent set.

use crate::error::LoadError;
use crate::properties::{parse_properties, RawProperties};
use crate::source::ResourceLocator;
use crate::theme::ThemeIdentity;

/// Loads the merged raw properties for `identity`.
///
/// The theme set is read first, then every parent entry whose key the theme
/// does not define is added. A missing resource on either side is an empty
/// set. When `identity` is the parent itself, the parent is read once.
///
/// # Errors
///
/// Returns [`LoadError::ResourceRead`] if a resource exists but cannot be read.
///
/// # Example
///
/// ```rust
/// use laf_defaults::{load, EmbeddedLocator, ThemeIdentity};
///
/// let locator = EmbeddedLocator::from_entries(&[
///     ("laf/core/Laf.properties", "Button.arc = 6\nButton.background = 3C3F41"),
///     ("acme/Flat.properties", "Button.arc = 0"),
/// ]);
///
/// let raw = load(&locator, &ThemeIdentity::parent(), &ThemeIdentity::new("acme.Flat")).unwrap();
/// assert_eq!(raw.get("Button.arc"), Some("0"));
/// assert_eq!(raw.get("Button.background"), Some("3C3F41"));
/// ```
pub fn load<L>(
    locator: &L,
    parent: &ThemeIdentity,
    identity: &ThemeIdentity,
) -> Result<RawProperties, LoadError>
where
    L: ResourceLocator + ?Sized,
{
    let mut properties = read_set(locator, identity)?;

    if identity != parent {
        properties.overlay_missing(read_set(locator, parent)?);
    }

    Ok(properties)
}

/// Reads and parses one property set; a missing resource is an empty set.
fn read_set<L>(locator: &L, identity: &ThemeIdentity) -> Result<RawProperties, LoadError>
where
    L: ResourceLocator + ?Sized,
{
    let name = identity.resource_name();
    match locator.open(&name) {
        Ok(Some(text)) => {
            let properties = parse_properties(&text);
            tracing::debug!(
                theme = %identity,
                resource = %name,
                entries = properties.len(),
                "loaded property set"
            );
            Ok(properties)
        }
        Ok(None) => {
            tracing::debug!(theme = %identity, resource = %name, "property set not found");
            Ok(RawProperties::new())
        }
        Err(source) => Err(LoadError::read(name, source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EmbeddedLocator;
    use std::cell::RefCell;
    use std::io;

    /// Records every resource name it is asked for.
    struct CountingLocator {
        inner: EmbeddedLocator,
        opened: RefCell<Vec<String>>,
    }

    impl ResourceLocator for CountingLocator {
        fn open(&self, name: &str) -> io::Result<Option<String>> {
            self.opened.borrow_mut().push(name.to_string());
            self.inner.open(name)
        }
    }

    struct FailingOn(&'static str);

    impl ResourceLocator for FailingOn {
        fn open(&self, name: &str) -> io::Result<Option<String>> {
            if name == self.0 {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            } else {
                Ok(Some("k = v".to_string()))
            }
        }
    }

    fn locator() -> EmbeddedLocator {
        EmbeddedLocator::from_entries(&[
            (
                "laf/core/Laf.properties",
                "Button.background = 3C3F41\nButton.arc = 6\n",
            ),
            (
                "laf/core/DarkLaf.properties",
                "Button.background = 2B2B2B\nLabel.foreground = BBBBBB\n",
            ),
        ])
    }

    #[test]
    fn test_theme_wins_parent_fills() {
        let raw = load(
            &locator(),
            &ThemeIdentity::parent(),
            &ThemeIdentity::new("laf.core.DarkLaf"),
        )
        .unwrap();

        assert_eq!(raw.get("Button.background"), Some("2B2B2B"));
        assert_eq!(raw.get("Button.arc"), Some("6"));
        assert_eq!(raw.get("Label.foreground"), Some("BBBBBB"));
        assert_eq!(raw.len(), 3);
    }

    #[test]
    fn test_missing_theme_gives_parent_only() {
        let raw = load(
            &locator(),
            &ThemeIdentity::parent(),
            &ThemeIdentity::new("acme.Missing"),
        )
        .unwrap();

        assert_eq!(raw.get("Button.background"), Some("3C3F41"));
        assert_eq!(raw.len(), 2);
    }

    #[test]
    fn test_missing_everything_is_empty() {
        let raw = load(
            &EmbeddedLocator::new(),
            &ThemeIdentity::parent(),
            &ThemeIdentity::new("acme.Missing"),
        )
        .unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn test_parent_identity_read_once() {
        let counting = CountingLocator {
            inner: locator(),
            opened: RefCell::new(Vec::new()),
        };

        let raw = load(&counting, &ThemeIdentity::parent(), &ThemeIdentity::parent()).unwrap();

        assert_eq!(raw.len(), 2);
        assert_eq!(
            counting.opened.borrow().as_slice(),
            ["laf/core/Laf.properties".to_string()]
        );
    }

    #[test]
    fn test_theme_read_failure() {
        let err = load(
            &FailingOn("acme/Broken.properties"),
            &ThemeIdentity::parent(),
            &ThemeIdentity::new("acme.Broken"),
        )
        .unwrap_err();

        match err {
            LoadError::ResourceRead { name, .. } => assert_eq!(name, "acme/Broken.properties"),
            other => panic!("Expected ResourceRead, got {:?}", other),
        }
    }

    #[test]
    fn test_parent_read_failure() {
        let result = load(
            &FailingOn("laf/core/Laf.properties"),
            &ThemeIdentity::parent(),
            &ThemeIdentity::new("acme.Fine"),
        );
        assert!(matches!(result, Err(LoadError::ResourceRead { .. })));
    }
}
