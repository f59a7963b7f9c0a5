//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` wins when set; otherwise each `-v` raises the level for the
//! workspace crates, starting from `warn`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Maps a `-v` count to a level name.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the filter for a `-v` count, unless `RUST_LOG` is set.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_for(verbosity);
        EnvFilter::new(format!("warn,laf_defaults={level},laf_inspect={level}"))
    })
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = Registry::default()
        .with(env_filter(verbosity))
        .with(fmt_layer)
        .try_init();
}
