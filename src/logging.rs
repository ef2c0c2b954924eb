//! Log setup.
//!
//! The game owns the terminal, so logs only ever go to a file. Without a log
//! file no subscriber is installed and `tracing` events are dropped.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Default filter: our crates at `info` (or `debug`), everything else at `warn`.
pub fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("word_hunt={level},word_hunt_core={level},warn")
}

/// Build a subscriber writing plain-text logs to `file`.
pub fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish()
}

/// Install a global subscriber writing plain-text logs to `path`.
///
/// `RUST_LOG` overrides the default filter.
pub fn init(path: &Path, debug: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    tracing::subscriber::set_global_default(file_subscriber(file, filter))
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}
