//! Themes bundled into the library at compile time.
//!
//! | Identity | Resource |
//! |----------|----------|
//! | `laf.core.Laf` | shared parent set |
//! | `laf.core.DarkLaf` | dark palette |
//! | `laf.core.LightLaf` | light palette |

use crate::source::EmbeddedLocator;
use crate::theme::{ThemeIdentity, DARK_THEME, LIGHT_THEME, PARENT_THEME};

const PARENT_PROPERTIES: &str = include_str!("../themes/laf/core/Laf.properties");
const DARK_PROPERTIES: &str = include_str!("../themes/laf/core/DarkLaf.properties");
const LIGHT_PROPERTIES: &str = include_str!("../themes/laf/core/LightLaf.properties");

/// Identities of the bundled concrete themes.
pub const THEMES: &[&str] = &[DARK_THEME, LIGHT_THEME];

/// Returns a locator serving the bundled property sets.
pub fn locator() -> EmbeddedLocator {
    [
        (PARENT_THEME, PARENT_PROPERTIES),
        (DARK_THEME, DARK_PROPERTIES),
        (LIGHT_THEME, LIGHT_PROPERTIES),
    ]
    .into_iter()
    .fold(EmbeddedLocator::new(), |locator, (identity, content)| {
        locator.with(ThemeIdentity::new(identity).resource_name(), content)
    })
}

/// Returns true if `identity` names a bundled concrete theme.
pub fn is_builtin(identity: &ThemeIdentity) -> bool {
    THEMES.contains(&identity.name())
}
