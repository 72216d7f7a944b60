//! Metrics collection and exposition.
//!
//! # Metrics
//! - `routes_requests_total` (counter): requests by method, status, endpoint
//! - `routes_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Metric updates are cheap (atomic operations inside the recorder)
//! - When no exporter is installed the macros are no-ops, so tests and
//!   metrics-disabled deployments pay nothing

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter")
        }
    }
}

/// Record one finished inbound request.
pub fn record_request(method: &str, status: u16, endpoint: &str, start: Instant) {
    counter!(
        "routes_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "endpoint" => endpoint.to_string()
    )
    .increment(1);

    histogram!(
        "routes_request_duration_seconds",
        "endpoint" => endpoint.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
