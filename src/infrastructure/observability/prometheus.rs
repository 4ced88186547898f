//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MetricsConfig;

static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+(/|$)").unwrap());

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("slug_gateway_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics, path: &str) -> Router {
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Outcome of a slug lookup, used as a metric label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Found,
    Missing,
    Rejected,
    Failed,
}

impl LookupOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::Missing => "missing",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

/// Record a slug lookup metric
pub fn record_slug_lookup(model: &str, outcome: LookupOutcome, duration: Duration) {
    let labels = [
        ("model", model.to_string()),
        ("outcome", outcome.as_str().to_string()),
    ];

    counter!("slug_lookups_total", &labels).increment(1);
    histogram!("slug_lookup_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Replace numeric path segments so slugs and ids don't explode label cardinality
fn sanitize_path(path: &str) -> String {
    let path = NUMERIC_SEGMENT.replace_all(path, "/{id}$1");

    if path.len() > 50 {
        path[..50].to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path_numeric_id() {
        assert_eq!(sanitize_path("/api/items/123"), "/api/items/{id}");
        assert_eq!(sanitize_path("/api/items/123/children"), "/api/items/{id}/children");
    }

    #[test]
    fn test_sanitize_path_plain() {
        assert_eq!(sanitize_path("/graphql"), "/graphql");
    }

    #[test]
    fn test_sanitize_path_truncates() {
        let long = format!("/{}", "a".repeat(80));
        assert_eq!(sanitize_path(&long).len(), 50);
    }

    #[test]
    fn test_lookup_outcome_labels() {
        assert_eq!(LookupOutcome::Found.as_str(), "found");
        assert_eq!(LookupOutcome::Missing.as_str(), "missing");
        assert_eq!(LookupOutcome::Rejected.as_str(), "rejected");
        assert_eq!(LookupOutcome::Failed.as_str(), "failed");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_http_request("GET", "/health", 200, Duration::from_millis(3));
        record_slug_lookup("article", LookupOutcome::Found, Duration::from_millis(1));
    }
}
