//! Line-oriented property file parser.
//!
//! The accepted syntax is the classic property-file subset:
//!
//! ```text
//! # comment
//! ! also a comment
//! Button.background = 3C3F41
//! Button.arc: 6
//! @accent=4A88C7
//! Label.text = a long value that \
//!              continues here
//! ```
//!
//! - The first `=` or `:` separates key and value; surrounding whitespace is
//!   ignored.
//! - A line without a separator is a key with an empty value.
//! - A line ending in an odd number of backslashes continues on the next line.
//!   Comment lines never continue.
//! - Duplicates within one text overwrite earlier entries.
//!
//! Parsing never fails. A bad line degrades to a harmless entry.

use super::{trim_blank, RawProperties};

/// Parses property-file text into a [`RawProperties`] set.
///
/// # Example
///
/// ```rust
/// use laf_defaults::properties::parse_properties;
///
/// let props = parse_properties("# colors\nButton.background = 3C3F41\nButton.arc: 6\n");
/// assert_eq!(props.get("Button.background"), Some("3C3F41"));
/// assert_eq!(props.get("Button.arc"), Some("6"));
/// ```
pub fn parse_properties(text: &str) -> RawProperties {
    let mut props = RawProperties::new();

    for line in logical_lines(text) {
        let trimmed = trim_blank(&line);
        if trimmed.is_empty() || is_comment(trimmed) {
            continue;
        }

        let (key, value) = split_entry(trimmed);
        if key.is_empty() {
            continue;
        }
        props.insert(key, value);
    }

    props
}

/// Joins continuation lines into logical lines.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;

    for raw in text.lines() {
        // A comment line never continues onto the next one.
        if pending.is_none() && is_comment(trim_blank_start(raw)) {
            lines.push(raw.to_string());
            continue;
        }

        let piece = match pending {
            // Leading whitespace of a continuation line is not significant.
            Some(_) => trim_blank_start(raw),
            None => raw,
        };

        let (body, continues) = strip_continuation(piece);
        let current = pending.get_or_insert_with(String::new);
        current.push_str(body);

        if !continues {
            lines.extend(pending.take());
        }
    }

    // A dangling continuation on the last line still yields its content.
    lines.extend(pending);
    lines
}

fn trim_blank_start(line: &str) -> &str {
    line.trim_start_matches(|c: char| c <= ' ')
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with('!')
}

/// Removes a trailing continuation backslash, reporting whether one was found.
///
/// Only an odd run of trailing backslashes continues the line; `\\` at the end
/// is an escaped backslash and is kept verbatim.
fn strip_continuation(line: &str) -> (&str, bool) {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    if trailing % 2 == 1 {
        (&line[..line.len() - 1], true)
    } else {
        (line, false)
    }
}

/// Splits a trimmed, non-comment line at its first separator.
fn split_entry(line: &str) -> (&str, &str) {
    match line.find(['=', ':']) {
        Some(idx) => (trim_blank(&line[..idx]), trim_blank(&line[idx + 1..])),
        None => (line, ""),
    }
}
