//! Telemetry adapter - installs the global `tracing` subscriber.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter directive '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Installs a `tracing-subscriber` formatter writing to stderr.
///
/// Only one global subscriber can exist per process; a second call returns
/// `TelemetryError::AlreadyInitialized`.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.level).map_err(|e| TelemetryError::InvalidFilter {
        directive: config.level.clone(),
        reason: e.to_string(),
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;
    tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialized");
    Ok(())
}
