//! Metrics for the scraper API
//!
//! Counters and histograms are recorded through the `metrics` facade and
//! rendered by an in-process Prometheus recorder served at `/metrics`.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fmt;
use std::sync::{Once, OnceLock};
use tracing::{info, warn};

static INIT: Once = Once::new();
static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Every metric name the service emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    LookupsTotal,
    StoreRequestsTotal,
    StoreRequestDuration,
    AppsReturned,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::LookupsTotal => "playstore_lookups_total",
            MetricName::StoreRequestsTotal => "playstore_store_requests_total",
            MetricName::StoreRequestDuration => "playstore_store_request_duration_seconds",
            MetricName::AppsReturned => "playstore_apps_returned",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [LookupsTotal, StoreRequestsTotal, StoreRequestDuration, AppsReturned].into_iter()
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Install the Prometheus recorder. Idempotent.
pub fn init() {
    INIT.call_once(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            if HANDLE.set(handle).is_err() {
                warn!("METRICS: handle already set");
            }
            info!("Prometheus recorder installed");
        }
        Err(e) => warn!("Failed to install Prometheus recorder: {}", e),
    });
}

/// Prometheus text exposition, if the recorder is installed.
pub fn render() -> Option<String> {
    HANDLE.get().map(|handle| handle.render())
}

pub mod lookup {
    use super::MetricName;

    pub fn resolved() {
        ::metrics::counter!(MetricName::LookupsTotal.as_str(), "outcome" => "resolved").increment(1);
    }

    pub fn not_found() {
        ::metrics::counter!(MetricName::LookupsTotal.as_str(), "outcome" => "not_found").increment(1);
    }
}

pub mod store {
    use super::MetricName;

    pub fn request_success(duration_secs: f64) {
        ::metrics::counter!(MetricName::StoreRequestsTotal.as_str(), "result" => "success").increment(1);
        ::metrics::histogram!(MetricName::StoreRequestDuration.as_str()).record(duration_secs);
    }

    pub fn request_error() {
        ::metrics::counter!(MetricName::StoreRequestsTotal.as_str(), "result" => "error").increment(1);
    }
}

pub mod scrape {
    use super::MetricName;

    pub fn apps_returned(count: usize) {
        ::metrics::histogram!(MetricName::AppsReturned.as_str()).record(count as f64);
    }
}
