//! Tracing setup for the terminal client.
//!
//! The TUI owns the terminal, so logs go to a file only; tail it from
//! another shell while playing.
use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

/// Initialize file logging under the configured (or platform) log directory.
pub fn init(config: &ClientConfig) -> Result<()> {
    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "geomath.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep the file writer alive for the process lifetime.
    std::mem::forget(guard);

    tracing::info!("Log file: {}/geomath.log", log_dir.display());

    Ok(())
}

/// Platform-specific log directory.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "geomath")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/geomath/logs"))
}
