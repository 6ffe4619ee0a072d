//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to log lines
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive
    pub log_level: String,

    /// Whether to write logs to stdout at all
    pub console_output: bool,

    /// Whether to emit JSON lines instead of pretty output
    pub json_logs: bool,

    /// Whether to register the Prometheus collectors
    pub metrics_enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "folio".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            metrics_enabled: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FOLIO_SERVICE_NAME`: Service name (default: folio)
    /// - `FOLIO_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `FOLIO_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `FOLIO_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `FOLIO_METRICS`: Register metrics (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service_name: lookup("FOLIO_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("FOLIO_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            console_output: lookup("FOLIO_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.console_output),

            json_logs: lookup("FOLIO_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.json_logs),

            metrics_enabled: lookup("FOLIO_METRICS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.metrics_enabled),
        }
    }

    /// Configuration for a single component.
    pub fn for_subsystem(subsystem_id: u8, subsystem_name: &str) -> Self {
        let mut config = Self::from_env();
        config.service_name = format!(
            "fl-{:02}-{}",
            subsystem_id,
            subsystem_name.to_lowercase().replace(' ', "-")
        );
        config
    }
}

/// `true`, `1`, `yes` and `on` (any case) enable a flag; anything else disables it.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
