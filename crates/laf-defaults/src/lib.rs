//! Property-file driven look-and-feel defaults.
//!
//! `laf-defaults` turns hand-written property files into a typed table of UI
//! defaults (colors, integers, text). A theme is a named property set layered
//! over one shared parent set; values can reference each other and wildcard
//! keys can rewrite whole families of keys at once.
//!
//! # Quick Start
//!
//! ```rust
//! use laf_defaults::{builtin, DefaultsEngine, DefaultsTable, ThemeIdentity};
//!
//! // What the host toolkit already provides
//! let base = DefaultsTable::new().with("Button.font", "Dialog");
//!
//! let engine = DefaultsEngine::new(builtin::locator());
//! let table = engine.build_defaults(&ThemeIdentity::new("laf.core.DarkLaf"), &base);
//!
//! assert!(table.color("Panel.background").is_some());
//! assert_eq!(table.text("Button.font"), Some("Dialog"));
//! ```
//!
//! # Property files
//!
//! ```text
//! # variables: only reference targets, never defaults themselves
//! @background = 2B2B2B
//! @accent     = 4A88C7
//!
//! # global override: every key ending in ".focusColor"
//! *.focusColor = @accent
//!
//! Panel.background = @background
//! Button.arc       = 6
//! Label.font       = Dialog
//! ```
//!
//! # Architecture
//!
//! ```text
//! load (theme over parent)
//!   └─> expand globals
//!         └─> per key: resolve references ─> coerce ─> DefaultsTable
//! ```
//!
//! - [`ResourceLocator`]: where property files come from (directories,
//!   embedded bundles, or a stack of both)
//! - [`load`]: theme set merged over the parent set
//! - [`globals::expand`]: wildcard `*.suffix` overrides
//! - [`resolve`]: `@reference` following with cycle detection
//! - [`coerce`]: ordered rules picking `Color`, `Integer` or `Text`
//! - [`build_defaults`] / [`DefaultsEngine`]: the whole pass
//!
//! # Failure model
//!
//! Only I/O errors are errors. A theme that cannot be read leaves the base
//! table untouched; dangling references and odd values degrade to text.
//! Progress and problems are reported through [`tracing`]; install a
//! subscriber in the host to see them.

pub mod builtin;
mod coerce;
mod config;
mod engine;
mod error;
pub mod globals;
mod loader;
mod mode;
pub mod properties;
mod resolve;
mod source;
mod table;
mod theme;
mod value;

pub use coerce::{coerce, matching_rule, CoercionRule, COERCION_RULES};
pub use config::{EngineConfig, AUTO_THEME};
pub use engine::{build_defaults, DefaultsEngine};
pub use error::{ConfigError, LoadError, ResolveError};
pub use globals::{Expansion, GlobalOverrides};
pub use loader::load;
pub use mode::{detect_color_mode, reset_mode_detector, set_mode_detector, ColorMode};
pub use properties::RawProperties;
pub use resolve::{is_resolvable, resolve};
pub use source::{DirLocator, EmbeddedLocator, LayeredLocator, ResourceLocator};
pub use table::DefaultsTable;
pub use theme::{ThemeIdentity, DARK_THEME, LIGHT_THEME, PARENT_THEME, PROPERTIES_EXTENSION};
pub use value::{ResolvedValue, Rgb};
