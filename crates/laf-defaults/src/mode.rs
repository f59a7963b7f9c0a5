//! OS color-mode detection for picking a bundled theme.
//!
//! [`detect_color_mode`] asks the OS whether the user prefers a light or dark
//! scheme. Hosts and tests can force an answer with [`set_mode_detector`]:
//!
//! ```rust
//! use laf_defaults::{set_mode_detector, detect_color_mode, ColorMode};
//!
//! set_mode_detector(|| ColorMode::Light);
//! assert_eq!(detect_color_mode(), ColorMode::Light);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    Dark,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => f.write_str("light"),
            ColorMode::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(format!("unknown color mode '{}'", other)),
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used by [`detect_color_mode`].
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores OS-based detection.
pub fn reset_mode_detector() {
    set_mode_detector(os_mode_detector);
}

/// Returns the current color mode using the configured detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

/// Queries the OS; an unknown or failed answer counts as dark.
fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        Ok(OsThemeMode::Light) => ColorMode::Light,
        Ok(OsThemeMode::Dark) | Ok(OsThemeMode::Unspecified) => ColorMode::Dark,
        Err(err) => {
            tracing::debug!(error = ?err, "color mode detection failed, assuming dark");
            ColorMode::Dark
        }
    }
}
