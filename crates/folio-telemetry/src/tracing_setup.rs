//! `tracing-subscriber` setup.
//!
//! One global subscriber per process: an `EnvFilter` followed by either a
//! JSON or a pretty formatting layer.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Build the filter from `RUST_LOG`, falling back to the configured level.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Config(e.to_string()))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    // JSON output for log shipping
    let json_layer = (config.console_output && config.json_logs).then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
    });

    // Pretty output for development
    let pretty_layer = (config.console_output && !config.json_logs).then(|| {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|e| TelemetryError::TracerInit(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        "Tracing initialized"
    );

    Ok(())
}
