//! Typed default values.
//!
//! Every resolved property becomes exactly one [`ResolvedValue`]. The variant
//! is chosen once, by [`coerce`](crate::coerce), and consumers match on it
//! instead of sniffing strings again.

use std::fmt;

use serde::{Serialize, Serializer};

/// A 24-bit RGB color.
///
/// ```rust
/// use laf_defaults::Rgb;
///
/// let red = Rgb::new(0xFF0000);
/// assert_eq!(red.red(), 255);
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    /// Creates a color from a packed `0xRRGGBB` value; bits above 24 are dropped.
    pub fn new(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    /// Creates a color from its components.
    pub fn from_components(red: u8, green: u8, blue: u8) -> Self {
        Self(u32::from(red) << 16 | u32::from(green) << 8 | u32::from(blue))
    }

    /// The packed `0xRRGGBB` value.
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<u32> for Rgb {
    fn from(rgb: u32) -> Self {
        Self::new(rgb)
    }
}

/// A default value after variable resolution and coercion.
///
/// Serializes adjacently tagged, e.g. `{"type": "color", "value": "#3c3f41"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ResolvedValue {
    /// Six hex digits, e.g. `3C3F41`.
    Color(Rgb),
    /// A base-10, 32-bit signed integer.
    Integer(i32),
    /// Anything else, trimmed.
    Text(String),
}

impl ResolvedValue {
    /// Returns the color, if this is a [`ResolvedValue::Color`].
    pub fn as_color(&self) -> Option<Rgb> {
        match self {
            ResolvedValue::Color(rgb) => Some(*rgb),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [`ResolvedValue::Integer`].
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            ResolvedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text, if this is a [`ResolvedValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResolvedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant: `color`, `integer` or `text`.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolvedValue::Color(_) => "color",
            ResolvedValue::Integer(_) => "integer",
            ResolvedValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedValue::Color(rgb) => write!(f, "{}", rgb),
            ResolvedValue::Integer(n) => write!(f, "{}", n),
            ResolvedValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<Rgb> for ResolvedValue {
    fn from(rgb: Rgb) -> Self {
        ResolvedValue::Color(rgb)
    }
}

impl From<i32> for ResolvedValue {
    fn from(n: i32) -> Self {
        ResolvedValue::Integer(n)
    }
}

impl From<&str> for ResolvedValue {
    fn from(s: &str) -> Self {
        ResolvedValue::Text(s.to_string())
    }
}

impl From<String> for ResolvedValue {
    fn from(s: String) -> Self {
        ResolvedValue::Text(s)
    }
}
