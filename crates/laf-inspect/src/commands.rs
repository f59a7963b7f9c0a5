//! Subcommand handlers. Each returns the text to print.

use std::path::Path;

use anyhow::{Context, Result};
use laf_defaults::properties::{global_suffix, is_variable_key};
use laf_defaults::{
    builtin, coerce, resolve, DefaultsTable, EngineConfig, RawProperties, ThemeIdentity,
};

use crate::cli::{Cli, Command};
use crate::output::{render_raw, render_table, render_themes, ThemeRow};

pub fn run(cli: &Cli) -> Result<String> {
    let config = cli.engine_config()?;

    match &cli.command {
        Command::Resolve { base, prefix } => {
            let base = match base {
                Some(path) => read_base(path)?,
                None => DefaultsTable::new(),
            };
            resolve_theme(&config, &base, prefix.as_deref(), cli)
        }
        Command::Raw { prefix } => raw_theme(&config, prefix.as_deref(), cli),
        Command::Themes => list_themes(&config, cli),
    }
}

fn resolve_theme(
    config: &EngineConfig,
    base: &DefaultsTable,
    prefix: Option<&str>,
    cli: &Cli,
) -> Result<String> {
    let engine = config
        .build_engine()
        .context("failed to set up theme locators")?;
    let identity = config.theme_identity();
    tracing::info!(theme = %identity, "resolving defaults");

    let table = engine.build_defaults(&identity, base);
    let table: DefaultsTable = table
        .into_iter()
        .filter(|(key, _)| matches_prefix(key, prefix))
        .collect();

    render_table(&table, cli.output)
}

fn raw_theme(config: &EngineConfig, prefix: Option<&str>, cli: &Cli) -> Result<String> {
    let engine = config
        .build_engine()
        .context("failed to set up theme locators")?;
    let identity = config.theme_identity();

    let raw = engine
        .load(&identity)
        .with_context(|| format!("failed to load theme {}", identity))?;
    let raw: RawProperties = raw
        .into_iter()
        .filter(|(key, _)| matches_prefix(key, prefix))
        .collect();

    render_raw(&raw, cli.output)
}

fn list_themes(config: &EngineConfig, cli: &Cli) -> Result<String> {
    let selected = config.theme_identity();
    let rows: Vec<ThemeRow> = builtin::THEMES
        .iter()
        .map(|name| {
            let identity = ThemeIdentity::new(*name);
            ThemeRow {
                selected: identity == selected,
                resource: identity.resource_name(),
                identity: identity.to_string(),
            }
        })
        .collect();

    render_themes(&rows, cli.output)
}

/// Reads a property file and coerces it into a base table.
///
/// References inside the file are followed; a cyclic one is kept as text.
/// Variable and global keys are not copied into the table.
pub fn read_base(path: &Path) -> Result<DefaultsTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read base defaults {}", path.display()))?;
    let raw = RawProperties::parse(&text);

    Ok(raw
        .iter()
        .filter(|(key, _)| !is_variable_key(key) && global_suffix(key).is_none())
        .map(|(key, value)| {
            let resolved = resolve(&raw, value).unwrap_or_else(|_| value.to_string());
            (key, coerce(&resolved))
        })
        .collect())
}

fn matches_prefix(key: &str, prefix: Option<&str>) -> bool {
    prefix.map_or(true, |prefix| key.starts_with(prefix))
}
