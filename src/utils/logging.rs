//! Tracing initialization for ferry.
//!
//! The terminal belongs to the TUI, so logs go to a file through a non-blocking appender.
//! Filter priority: RUST_LOG > --log-level > `[log] level` > "info".

use crate::core::error::{AppError, Result};

use chrono::Local;
use std::fmt as stdfmt;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "ferry.log";

/// Local timestamp (YYYY-MM-DD HH:MM:SS)
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Directory the log file goes to when the config does not name one.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("ferry"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Installs the global subscriber writing to `<dir>/ferry.log`.
///
/// The returned guard flushes the writer on drop and must live until the session ends.
pub fn init_tracing(log_dir: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_timer(LocalTime)
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Logging(format!("Failed to initialize tracing: {}", e)))?;

    Ok(guard)
}
