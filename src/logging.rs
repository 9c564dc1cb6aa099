//! Logger setup
//!
//! The library logs through the `log` facade. The binary installs
//! `env_logger`, filtered by `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::warn;
use std::fs::OpenOptions;
use std::path::Path;

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    /// Append to a file
    File(&'a Path),
    Stderr,
    /// Drop everything; used while the TUI owns the terminal
    Disabled,
}

/// Pick a sink: an explicit file wins, otherwise stderr unless the TUI is running
#[must_use]
pub const fn choose_sink(log_file: Option<&Path>, tui: bool) -> LogSink<'_> {
    match (log_file, tui) {
        (Some(path), _) => LogSink::File(path),
        (None, true) => LogSink::Disabled,
        (None, false) => LogSink::Stderr,
    }
}

/// Install the global logger
///
/// Returns `false` when another logger was already installed and `sink`
/// was not applied.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(sink: LogSink<'_>) -> Result<bool> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    match sink {
        LogSink::Disabled => return Ok(true),
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }

    // A second init (e.g. in tests) keeps the first logger
    match builder.try_init() {
        Ok(()) => Ok(true),
        Err(e) => {
            if let LogSink::File(path) = sink {
                warn!("not logging to {}: {e}", path.display());
            }
            Ok(false)
        }
    }
}
