//! Prometheus metrics for the Folio chain.
//!
//! All metrics follow the naming convention: `folio_<component>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Gauge, Histogram, HistogramOpts, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // CHAIN METRICS
    // =========================================================================

    /// Calls executed, by call name and outcome (committed/reverted)
    pub static ref CALLS_EXECUTED: CounterVec = CounterVec::new(
        Opts::new("folio_chain_calls_total", "Calls executed by the chain"),
        &["call", "outcome"]
    ).expect("metric creation failed");

    /// Call execution duration, including snapshot and rollback
    pub static ref CALL_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "folio_chain_call_duration_seconds",
            "Time spent executing a call"
        ).buckets(exponential_buckets(0.000_001, 2.0, 16).expect("valid buckets"))
    ).expect("metric creation failed");

    /// Contracts deployed, by kind
    pub static ref CONTRACTS_DEPLOYED: CounterVec = CounterVec::new(
        Opts::new("folio_chain_contracts_deployed_total", "Contracts deployed"),
        &["kind"]  // kind: book_store/store_front/purchase_token
    ).expect("metric creation failed");

    // =========================================================================
    // BOOK STORE METRICS (Subsystem 1)
    // =========================================================================

    /// Versions published
    pub static ref VERSIONS_PUBLISHED: Counter = Counter::new(
        "folio_bookstore_versions_published_total",
        "Total number of book versions published"
    ).expect("metric creation failed");

    /// Copies minted across all versions
    pub static ref COPIES_MINTED: Counter = Counter::new(
        "folio_bookstore_copies_minted_total",
        "Total number of copies minted at publish time"
    ).expect("metric creation failed");

    /// Most recent version id seen by the chain
    pub static ref LATEST_VERSION_ID: Gauge = Gauge::new(
        "folio_bookstore_latest_version_id",
        "Highest version id published"
    ).expect("metric creation failed");

    // =========================================================================
    // STORE FRONT METRICS (Subsystem 3)
    // =========================================================================

    /// Copies sold through a store front
    pub static ref COPIES_PURCHASED: Counter = Counter::new(
        "folio_storefront_copies_purchased_total",
        "Total number of copies purchased from authors"
    ).expect("metric creation failed");

    // =========================================================================
    // ERROR METRICS
    // =========================================================================

    /// Reverts by error kind
    pub static ref REVERTS: CounterVec = CounterVec::new(
        Opts::new("folio_reverts_total", "Reverted calls by error kind"),
        &["kind"]
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Registering twice is harmless; collectors already present are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Chain
        Box::new(CALLS_EXECUTED.clone()),
        Box::new(CALL_DURATION.clone()),
        Box::new(CONTRACTS_DEPLOYED.clone()),
        // Book store
        Box::new(VERSIONS_PUBLISHED.clone()),
        Box::new(COPIES_MINTED.clone()),
        Box::new(LATEST_VERSION_ID.clone()),
        // Store front
        Box::new(COPIES_PURCHASED.clone()),
        // Errors
        Box::new(REVERTS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
