//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use laf_defaults::EngineConfig;

use crate::output::OutputMode;

/// Resolve look-and-feel themes and inspect the resulting defaults.
#[derive(Debug, Clone, Parser)]
#[command(name = "laf-inspect", version)]
pub struct Cli {
    /// Engine configuration file (YAML)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Theme identity to resolve, or "auto" to follow the OS color mode
    #[arg(long, value_name = "NAME", global = true)]
    pub theme: Option<String>,

    /// Directory to search for property files, before configured ones
    #[arg(long = "dir", value_name = "DIR", global = true)]
    pub dirs: Vec<PathBuf>,

    /// Don't serve the bundled themes
    #[arg(long, global = true)]
    pub no_builtins: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Auto, global = true)]
    pub output: OutputMode,

    /// Increase logging verbosity
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve a theme and print its defaults table
    Resolve {
        /// Property file coerced into the base defaults
        #[arg(long, value_name = "FILE")]
        base: Option<PathBuf>,

        /// Only show keys starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Print the merged raw properties before expansion
    Raw {
        /// Only show keys starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },
    /// List the bundled themes
    Themes,
}

impl Cli {
    /// Loads the configuration file, if any, and applies flag overrides.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if !self.dirs.is_empty() {
            let configured = std::mem::take(&mut config.search_dirs);
            config.search_dirs = self.dirs.iter().cloned().chain(configured).collect();
        }
        if self.no_builtins {
            config.builtin_themes = false;
        }

        Ok(config)
    }
}
