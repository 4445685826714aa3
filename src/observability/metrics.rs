//! Metrics collection and exposition.
//!
//! # Metrics
//! - `fixture_requests_total` (counter): requests by route, status
//! - `fixture_request_duration_seconds` (histogram): latency by route
//!
//! # Design Decisions
//! - Exporter is optional; recording without one installed is a no-op
//! - Route label is the matched pattern, never the raw path

use std::net::SocketAddr;
use std::time::Instant;

use ::metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(route: &str, class: &str, status: u16, start: Instant) {
    counter!(
        "fixture_requests_total",
        "route" => route.to_string(),
        "class" => class.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("fixture_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}
