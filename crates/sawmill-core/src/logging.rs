//! Logging configuration using tracing
//!
//! The TUI owns stdout/stderr, so diagnostics go to a rolling file instead.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/sawmill/logs/`.
/// Log level is controlled by the `SAWMILL_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SAWMILL_LOG=debug cargo run
/// SAWMILL_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "sawmill.log");

    // Default to info, allow override via SAWMILL_LOG
    let env_filter = EnvFilter::try_from_env("SAWMILL_LOG")
        .unwrap_or_else(|_| EnvFilter::new("sawmill=info,sawmill_core=info,sawmill_tui=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("sawmill starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("sawmill").join("logs")
}
