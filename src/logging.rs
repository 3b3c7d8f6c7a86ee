//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log output goes to a file only. `RUST_LOG`
//! overrides the default `info` level.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "quiz-arcade.log";

pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("quiz-arcade").join("logs")
}

/// Install the global subscriber writing to `<log_dir>/quiz-arcade.log`.
///
/// Keep the returned guard alive for as long as events should be flushed.
pub fn init(log_dir: &Path) -> io::Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(log_file = %log_dir.join(LOG_FILE_NAME).display(), "logging initialized");
    Ok(guard)
}
