//! File logging
//!
//! The TUI owns stdout and headless mode prints NDJSON there, so every log
//! line goes to a daily rolling file instead. Passwords are never logged.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "PWCHECK_LOG";

/// Filter used when `PWCHECK_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "pwcheck=info,warn";

const LOG_FILE_PREFIX: &str = "pwcheck.log";

/// Install the global subscriber writing to `<data_local_dir>/pwcheck/logs/`.
///
/// ```bash
/// PWCHECK_LOG=debug pwcheck
/// PWCHECK_LOG=pwcheck_client=trace pwcheck --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter(std::env::var(LOG_ENV_VAR).ok().as_deref()))
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("pwcheck {} logging to {}", env!("CARGO_PKG_VERSION"), log_dir.display());
    Ok(())
}

/// Build the filter from the raw `PWCHECK_LOG` value
fn env_filter(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pwcheck")
        .join("logs")
}
