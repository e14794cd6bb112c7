//! File logging setup.
//!
//! The terminal belongs to the game view, so log output goes to
//! `<log dir>/cardinal-chains.log` through a non-blocking appender.
//! `RUST_LOG` controls the filter (default: `info`).

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

pub const LOG_FILE_NAME: &str = "cardinal-chains.log";

/// Install the global subscriber.
///
/// Keep the returned guard alive for the whole run; dropping it flushes
/// pending lines. Returns `None` when logging is disabled.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.dir)
        .with_context(|| format!("failed to create log directory {}", config.dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&config.dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(dir = %config.dir.display(), "logging initialized");
    Ok(Some(guard))
}
