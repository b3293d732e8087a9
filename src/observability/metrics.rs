//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define server metrics (request count, latency)
//! - Expose a Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `apiserver_requests_total` (counter): total requests by method, status
//! - `apiserver_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Labels limited to method and status code to keep cardinality bounded
//! - Exporter failure is logged, never fatal: a scaffold without metrics
//!   still serves traffic

use axum::{extract::Request, middleware::Next, response::Response};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter on its own address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(
                "apiserver_requests_total",
                "Total HTTP requests by method and status"
            );
            describe_histogram!(
                "apiserver_request_duration_seconds",
                "HTTP request latency distribution"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, started: Instant) {
    counter!(
        "apiserver_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    histogram!("apiserver_request_duration_seconds").record(started.elapsed().as_secs_f64());
}

/// Axum middleware recording metrics for every request passing through.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();

    let response = next.run(request).await;

    record_request(method.as_str(), response.status().as_u16(), started);
    response
}
