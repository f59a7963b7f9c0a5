//! Error types for loading, resolution and configuration.
//!
//! Only I/O-level problems are errors here. Data-shape irregularities in a
//! property file (dangling references, malformed numbers) degrade to literal
//! text during resolution and coercion and are never reported as errors.

use std::io;
use std::path::PathBuf;

/// Errors raised while locating or reading property resources.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A resource exists but could not be read.
    #[error("failed to read resource \"{name}\": {source}")]
    ResourceRead {
        /// Resource name as passed to the locator.
        name: String,
        #[source]
        source: io::Error,
    },

    /// A search directory was registered that does not exist.
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound {
        /// Path that was registered.
        path: PathBuf,
    },
}

impl LoadError {
    /// Create a read error for the named resource.
    pub fn read(name: impl Into<String>, source: io::Error) -> Self {
        Self::ResourceRead {
            name: name.into(),
            source,
        }
    }
}

/// Errors raised while following variable references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A reference chain loops back on a key it already visited.
    #[error("cyclic variable reference: {}", chain.join(" -> "))]
    CyclicReference {
        /// Keys in visiting order; the last entry repeats an earlier one.
        chain: Vec<String>,
    },
}

/// Errors raised while reading an engine configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid YAML for [`EngineConfig`](crate::EngineConfig).
    #[error("invalid config{}: {message}", path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },
}
