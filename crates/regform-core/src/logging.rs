//! File logging setup
//!
//! Logs go to a daily rolling file, never to the terminal: the TUI owns the
//! screen and headless mode owns stdout. Form field values are never
//! logged, only field names, phases and message kinds.

use std::path::PathBuf;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding the log filter directives
pub const LOG_ENV_VAR: &str = "REGFORM_LOG";

/// Directives used when `REGFORM_LOG` is unset or unparseable
const DEFAULT_FILTER: &str = "regform=info,warn";

const LOG_FILE_PREFIX: &str = "regform.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Install the global file subscriber
///
/// Returns the directory the log files are written to.
///
/// # Examples
/// ```bash
/// REGFORM_LOG=debug regform
/// REGFORM_LOG=regform_app=trace regform --headless
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string())),
        )
        .try_init()
        .map_err(|e| Error::config(format!("Failed to install log subscriber: {}", e)))?;

    tracing::info!("regform {} starting", env!("CARGO_PKG_VERSION"));
    Ok(log_dir)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `<data_local_dir>/regform/logs`, or `./regform/logs` when there is none
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("regform")
        .join("logs")
}
