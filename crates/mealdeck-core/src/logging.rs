//! File logging setup.
//!
//! Logs go to ${MEALDECK_HOME}/logs/, never to the terminal: the TUI owns
//! the screen, and session storage faults are logged rather than surfaced.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

/// Initializes the global tracing subscriber writing to a daily log file.
///
/// Filter resolution order: MEALDECK_LOG env var, then `log_filter` from
/// config, then "info". Returns the appender guard; the caller must keep
/// it alive for the process lifetime or buffered lines are lost.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let filter = std::env::var("MEALDECK_LOG")
        .ok()
        .or_else(|| config.log_filter.clone())
        .unwrap_or_else(|| "info".to_string());

    let appender = tracing_appender::rolling::daily(&logs_dir, "mealdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // try_init: tests may install their own subscriber first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Ok(guard)
}
