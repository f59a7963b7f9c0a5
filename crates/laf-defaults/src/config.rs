//! Engine configuration.
//!
//! Hosts that don't want to wire locators by hand can describe the engine in
//! YAML. Every field is optional:
//!
//! ```yaml
//! theme: auto            # a theme identity, or "auto" to follow the OS color mode
//! parent: laf.core.Laf   # the shared parent identity
//! search_dirs:           # searched in order, before the bundled themes
//!   - ./themes
//! builtin_themes: true   # serve the bundled themes as the last layer
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::engine::DefaultsEngine;
use crate::error::{ConfigError, LoadError};
use crate::mode::detect_color_mode;
use crate::source::{DirLocator, LayeredLocator};
use crate::theme::{ThemeIdentity, PARENT_THEME};

/// The `theme` value that selects a bundled theme by color mode.
pub const AUTO_THEME: &str = "auto";

/// Declarative engine setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Theme identity, or [`AUTO_THEME`].
    pub theme: String,
    /// Shared parent identity.
    pub parent: String,
    /// Directories searched before the bundled themes.
    pub search_dirs: Vec<PathBuf>,
    /// Whether the bundled themes are available.
    pub builtin_themes: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            theme: AUTO_THEME.to_string(),
            parent: PARENT_THEME.to_string(),
            search_dirs: Vec::new(),
            builtin_themes: true,
        }
    }
}

impl EngineConfig {
    /// Parses a YAML configuration. Empty input yields the defaults.
    ///
    /// ```rust
    /// use laf_defaults::EngineConfig;
    ///
    /// let config = EngineConfig::from_yaml("theme: laf.core.LightLaf\nbuiltin_themes: true").unwrap();
    /// assert_eq!(config.theme_identity().name(), "laf.core.LightLaf");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&yaml, Some(path))
    }

    fn parse(yaml: &str, path: Option<&Path>) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })
    }

    /// Returns true if the theme is picked by color mode.
    pub fn is_auto(&self) -> bool {
        self.theme.trim().eq_ignore_ascii_case(AUTO_THEME)
    }

    /// The theme to resolve, detecting the color mode for [`AUTO_THEME`].
    pub fn theme_identity(&self) -> ThemeIdentity {
        if self.is_auto() {
            let mode = detect_color_mode();
            tracing::debug!(%mode, "picking bundled theme by color mode");
            ThemeIdentity::for_mode(mode)
        } else {
            ThemeIdentity::new(self.theme.trim())
        }
    }

    pub fn parent_identity(&self) -> ThemeIdentity {
        ThemeIdentity::new(self.parent.trim())
    }

    /// Builds an engine: search directories first, then the bundled themes.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DirectoryNotFound`] for a search directory that
    /// doesn't exist.
    pub fn build_engine(&self) -> Result<DefaultsEngine, LoadError> {
        let mut locator = LayeredLocator::new();

        if !self.search_dirs.is_empty() {
            let mut dirs = DirLocator::new();
            for dir in &self.search_dirs {
                dirs.add_dir(dir)?;
            }
            tracing::debug!(dirs = ?dirs.dirs(), "searching theme directories");
            locator.push(dirs);
        }
        if self.builtin_themes {
            locator.push(builtin::locator());
        }

        Ok(DefaultsEngine::new(locator).with_parent(self.parent_identity()))
    }
}
