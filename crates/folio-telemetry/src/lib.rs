//! # Folio Telemetry
//!
//! Structured logging and Prometheus metrics for the Folio chain.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an `EnvFilter`, pretty or JSON output
//! - **Metrics**: Prometheus collectors in a process-wide [`REGISTRY`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(&TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FOLIO_SERVICE_NAME` | `folio` | Service name in log lines |
//! | `FOLIO_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `FOLIO_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `FOLIO_JSON_LOGS` | `false` | JSON instead of pretty output |
//! | `FOLIO_METRICS` | `true` | Register Prometheus collectors |

#![warn(missing_docs)]

mod config;
pub mod metrics;
mod tracing_setup;

pub use config::{parse_flag, TelemetryConfig};
pub use metrics::{
    encode_metrics, register_metrics, HistogramTimer, CALLS_EXECUTED, CALL_DURATION,
    CONTRACTS_DEPLOYED, COPIES_MINTED, COPIES_PURCHASED, LATEST_VERSION_ID, REGISTRY, REVERTS,
    VERSIONS_PUBLISHED,
};
pub use tracing_setup::{build_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    /// A collector could not be registered or encoded.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// The log filter did not parse.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard to hold for the lifetime of the process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    if config.metrics_enabled {
        register_metrics()?;
    }
    init_tracing(config)?;

    Ok(TelemetryGuard {
        service_name: config.service_name.clone(),
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
