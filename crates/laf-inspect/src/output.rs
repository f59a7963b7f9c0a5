//! Output mode control and rendering.
//!
//! [`OutputMode`] is the value of the `--output` flag. Text modes print one
//! `key = value` line per entry; structured modes serialize the data directly.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::{style, StyledObject, Term};
use laf_defaults::{DefaultsTable, RawProperties, ResolvedValue};
use serde::Serialize;

/// How output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Detect: TTY gets Term, pipe gets Text
    #[default]
    Auto,
    /// Always use terminal styling
    Term,
    /// Plain `key = value` lines
    Text,
    /// Serialize as JSON
    Json,
    /// Serialize as YAML
    Yaml,
}

impl OutputMode {
    /// Resolves Auto to Term or Text based on whether stdout is a terminal.
    pub fn resolve_auto(self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if Term::stdout().is_term() {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => other,
        }
    }

    /// Json and Yaml serialize the data instead of printing lines.
    pub fn is_structured(self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml)
    }
}

/// One row of the `themes` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeRow {
    pub identity: String,
    pub resource: String,
    pub selected: bool,
}

/// Renders a defaults table.
pub fn render_table(table: &DefaultsTable, mode: OutputMode) -> Result<String> {
    let mode = mode.resolve_auto();
    if mode.is_structured() {
        return serialize(table, mode);
    }

    match mode {
        OutputMode::Term => Ok(lines(
            table
                .iter()
                .map(|(key, value)| (style_key(key), style_value(value))),
        )),
        _ => Ok(lines(table.iter())),
    }
}

/// Renders a raw property set.
pub fn render_raw(raw: &RawProperties, mode: OutputMode) -> Result<String> {
    let mode = mode.resolve_auto();
    if mode.is_structured() {
        let map: BTreeMap<&str, &str> = raw.iter().collect();
        return serialize(&map, mode);
    }

    match mode {
        OutputMode::Term => Ok(lines(
            raw.iter()
                .map(|(key, value)| (style_key(key), style(value).force_styling(true))),
        )),
        _ => Ok(lines(raw.iter())),
    }
}

/// Renders the theme listing.
pub fn render_themes(rows: &[ThemeRow], mode: OutputMode) -> Result<String> {
    let mode = mode.resolve_auto();
    if mode.is_structured() {
        return serialize(rows, mode);
    }

    let styled = mode == OutputMode::Term;
    let out = rows
        .iter()
        .map(|row| {
            let marker = if row.selected { "*" } else { " " };
            if styled {
                format!(
                    "{} {}  {}",
                    marker,
                    style_key(&row.identity),
                    style(&row.resource).dim().force_styling(true)
                )
            } else {
                format!("{} {}  {}", marker, row.identity, row.resource)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(out)
}

fn serialize<T: Serialize + ?Sized>(data: &T, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(data).context("failed to serialize JSON"),
        OutputMode::Yaml => serde_yaml::to_string(data).context("failed to serialize YAML"),
        _ => unreachable!("serialize called with a text mode"),
    }
}

fn lines<K, V>(entries: impl Iterator<Item = (K, V)>) -> String
where
    K: std::fmt::Display,
    V: std::fmt::Display,
{
    entries
        .map(|(key, value)| format!("{} = {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn style_key(key: &str) -> StyledObject<&str> {
    style(key).cyan().force_styling(true)
}

fn style_value(value: &ResolvedValue) -> StyledObject<String> {
    let styled = style(value.to_string()).force_styling(true);
    match value {
        ResolvedValue::Color(_) => styled.magenta(),
        ResolvedValue::Integer(_) => styled.yellow(),
        ResolvedValue::Text(_) => styled.green(),
    }
}
