//! Classification of resolved strings into typed values.
//!
//! Coercion is an ordered list of rules, [`COERCION_RULES`], tried in sequence
//! on the string with surrounding space and ASCII control characters removed.
//! Other Unicode whitespace is kept. The first rule that accepts the string decides the
//! variant; if none does, the value is [`ResolvedValue::Text`].
//!
//! | Order | Rule | Accepts | Produces |
//! |-------|------|---------|----------|
//! | 1 | `color` | exactly six hex digits | `Color` |
//! | 2 | `integer` | optionally signed base-10, 32-bit range | `Integer` |
//! | - | fallback | anything | `Text` |
//!
//! Order matters: `123456` is six valid hex digits, so it is a color, never
//! the integer 123456.

use crate::properties::trim_blank;
use crate::value::{ResolvedValue, Rgb};

/// A single named coercion rule.
#[derive(Debug, Clone, Copy)]
pub struct CoercionRule {
    /// Short rule name, used in logs and tests.
    pub name: &'static str,
    /// Returns the typed value if the trimmed input matches this rule.
    pub apply: fn(&str) -> Option<ResolvedValue>,
}

/// The coercion rules in precedence order.
pub const COERCION_RULES: &[CoercionRule] = &[
    CoercionRule {
        name: "color",
        apply: coerce_color,
    },
    CoercionRule {
        name: "integer",
        apply: coerce_integer,
    },
];

/// Coerces a resolved string into a typed value.
///
/// # Example
///
/// ```rust
/// use laf_defaults::{coerce, ResolvedValue, Rgb};
///
/// assert_eq!(coerce("FF0000"), ResolvedValue::Color(Rgb::new(16711680)));
/// assert_eq!(coerce(" 42 "), ResolvedValue::Integer(42));
/// assert_eq!(coerce("123456"), ResolvedValue::Color(Rgb::new(0x123456)));
/// assert_eq!(coerce("Dialog"), ResolvedValue::Text("Dialog".into()));
/// ```
pub fn coerce(value: &str) -> ResolvedValue {
    let trimmed = trim_blank(value);
    COERCION_RULES
        .iter()
        .find_map(|rule| (rule.apply)(trimmed))
        .unwrap_or_else(|| ResolvedValue::Text(trimmed.to_string()))
}

/// Returns the name of the rule that would decide `value`, or `"text"`.
pub fn matching_rule(value: &str) -> &'static str {
    let trimmed = trim_blank(value);
    COERCION_RULES
        .iter()
        .find(|rule| (rule.apply)(trimmed).is_some())
        .map(|rule| rule.name)
        .unwrap_or("text")
}

fn coerce_color(value: &str) -> Option<ResolvedValue> {
    if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(value, 16)
        .ok()
        .map(|rgb| ResolvedValue::Color(Rgb::new(rgb)))
}

fn coerce_integer(value: &str) -> Option<ResolvedValue> {
    value.parse::<i32>().ok().map(ResolvedValue::Integer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = COERCION_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["color", "integer"]);
    }

    #[test]
    fn test_color_rule_in_isolation() {
        assert_eq!(
            coerce_color("3c3F41"),
            Some(ResolvedValue::Color(Rgb::new(0x3C3F41)))
        );
        assert_eq!(coerce_color("3C3F4"), None);
        assert_eq!(coerce_color("3C3F411"), None);
        assert_eq!(coerce_color("GGGGGG"), None);
        assert_eq!(coerce_color("+12345"), None);
        assert_eq!(coerce_color("#3C3F4"), None);
    }

    #[test]
    fn test_integer_rule_in_isolation() {
        assert_eq!(coerce_integer("42"), Some(ResolvedValue::Integer(42)));
        assert_eq!(coerce_integer("-7"), Some(ResolvedValue::Integer(-7)));
        assert_eq!(coerce_integer("+7"), Some(ResolvedValue::Integer(7)));
        assert_eq!(coerce_integer("2147483648"), None);
        assert_eq!(coerce_integer("4.5"), None);
        assert_eq!(coerce_integer("0x10"), None);
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(coerce("FF0000"), ResolvedValue::Color(Rgb::new(16711680)));
        assert_eq!(coerce("000000"), ResolvedValue::Color(Rgb::new(0)));
    }

    #[test]
    fn test_six_digits_is_color_not_integer() {
        assert_eq!(coerce("123456"), ResolvedValue::Color(Rgb::new(0x123456)));
        assert_eq!(matching_rule("123456"), "color");
    }

    #[test]
    fn test_integers() {
        assert_eq!(coerce("42"), ResolvedValue::Integer(42));
        assert_eq!(coerce("-1"), ResolvedValue::Integer(-1));
        assert_eq!(coerce("1234567"), ResolvedValue::Integer(1234567));
        assert_eq!(coerce("-12345"), ResolvedValue::Integer(-12345));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(coerce("  FF0000\t"), ResolvedValue::Color(Rgb::new(0xFF0000)));
        assert_eq!(coerce(" 6 "), ResolvedValue::Integer(6));
        assert_eq!(coerce("  Dialog  "), ResolvedValue::Text("Dialog".into()));
        assert_eq!(coerce("\t\n42\r "), ResolvedValue::Integer(42));
    }

    #[test]
    fn test_unicode_whitespace_not_trimmed() {
        assert_eq!(coerce("\u{3000}42"), ResolvedValue::Text("\u{3000}42".into()));
        assert_eq!(
            coerce("FF0000\u{a0}"),
            ResolvedValue::Text("FF0000\u{a0}".into())
        );
        assert_eq!(matching_rule("\u{3000}42"), "text");
        assert_eq!(matching_rule("\u{1f}42"), "integer");
    }

    #[test]
    fn test_text_fallbacks() {
        assert_eq!(coerce("12px"), ResolvedValue::Text("12px".into()));
        assert_eq!(coerce("#FF0000"), ResolvedValue::Text("#FF0000".into()));
        assert_eq!(coerce("FF00000A"), ResolvedValue::Text("FF00000A".into()));
        assert_eq!(coerce("true"), ResolvedValue::Text("true".into()));
        assert_eq!(coerce("1,2,3,4"), ResolvedValue::Text("1,2,3,4".into()));
        assert_eq!(coerce(""), ResolvedValue::Text(String::new()));
        assert_eq!(matching_rule("12px"), "text");
    }

    #[test]
    fn test_unresolved_reference_is_text() {
        assert_eq!(
            coerce("@missing.key"),
            ResolvedValue::Text("@missing.key".into())
        );
    }
}
