//! Theme identities and the resource names derived from them.

use std::fmt;

use crate::mode::ColorMode;

/// Resource extension for property sets.
pub const PROPERTIES_EXTENSION: &str = ".properties";

/// Identity of the shared parent set every theme is layered over.
pub const PARENT_THEME: &str = "laf.core.Laf";

/// Identity of the bundled dark theme.
pub const DARK_THEME: &str = "laf.core.DarkLaf";

/// Identity of the bundled light theme.
pub const LIGHT_THEME: &str = "laf.core.LightLaf";

/// The fully-qualified, dot-separated name of a theme.
///
/// The identity determines where the theme's property set lives: dots become
/// path separators and the `.properties` extension is appended.
///
/// ```rust
/// use laf_defaults::ThemeIdentity;
///
/// let theme = ThemeIdentity::new("laf.core.DarkLaf");
/// assert_eq!(theme.resource_name(), "laf/core/DarkLaf.properties");
/// assert_eq!(theme.simple_name(), "DarkLaf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeIdentity(String);

impl ThemeIdentity {
    /// Creates an identity from a fully-qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The shared parent identity ([`PARENT_THEME`]).
    pub fn parent() -> Self {
        Self::new(PARENT_THEME)
    }

    /// The bundled theme matching a color mode.
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => Self::new(DARK_THEME),
            ColorMode::Light => Self::new(LIGHT_THEME),
        }
    }

    /// The fully-qualified name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The last dot-separated component of the name.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// The resource name holding this theme's property set.
    pub fn resource_name(&self) -> String {
        format!("{}{}", self.0.replace('.', "/"), PROPERTIES_EXTENSION)
    }
}

impl fmt::Display for ThemeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeIdentity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ThemeIdentity {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name() {
        assert_eq!(
            ThemeIdentity::new("a.b.Custom").resource_name(),
            "a/b/Custom.properties"
        );
        assert_eq!(
            ThemeIdentity::new("Flat").resource_name(),
            "Flat.properties"
        );
    }

    #[test]
    fn test_parent_identity() {
        assert_eq!(ThemeIdentity::parent().name(), PARENT_THEME);
        assert_eq!(
            ThemeIdentity::parent().resource_name(),
            "laf/core/Laf.properties"
        );
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(ThemeIdentity::for_mode(ColorMode::Dark).name(), DARK_THEME);
        assert_eq!(
            ThemeIdentity::for_mode(ColorMode::Light).name(),
            LIGHT_THEME
        );
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(ThemeIdentity::new("x.y.Z").simple_name(), "Z");
        assert_eq!(ThemeIdentity::new("Plain").simple_name(), "Plain");
    }

    #[test]
    fn test_display_and_from() {
        let theme: ThemeIdentity = "laf.core.DarkLaf".into();
        assert_eq!(theme.to_string(), "laf.core.DarkLaf");
        let owned: ThemeIdentity = String::from("laf.core.LightLaf").into();
        assert_eq!(owned.simple_name(), "LightLaf");
    }
}
