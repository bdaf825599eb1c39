//! File logging. The terminal is owned by the renderer, so logs never go to stdout.

use std::path::Path;

use thiserror::Error;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("log file path {0} has no file name")]
    NoFileName(String),
    #[error("failed to open log file: {0}")]
    Appender(String),
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Sends `tracing` output to `path`, filtered by `RUST_LOG` (default `info`).
pub fn init_file_logging(path: &Path) -> Result<(), LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::NoFileName(path.display().to_string()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .map_err(|e| LoggingError::Appender(e.to_string()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
