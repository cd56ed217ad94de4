//! Tracing setup for hosting binaries
//!
//! The gate itself only emits `tracing` events; a host that wants them on
//! disk calls [`init_logging`] once at startup.

use std::path::Path;

use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directory for log output
const LOG_DIR: &str = "logs";

/// Initialize file-only logging with daily rotation
///
/// Writes to `logs/toolgate.log`. The level defaults to INFO and can be
/// overridden through `RUST_LOG`.
pub fn init_logging() -> Result<()> {
    std::fs::create_dir_all(LOG_DIR)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "toolgate.log");

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // File layer only, no stdout - approval prompts share the terminal
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized, writing to {}/toolgate.log", LOG_DIR);

    Ok(())
}

/// Check if the log directory exists
pub fn logs_dir_exists() -> bool {
    Path::new(LOG_DIR).exists()
}
