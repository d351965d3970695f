//! Metrics collection and exposition.
//!
//! # Metrics
//! - `todo_requests_total` (counter): requests by method, route, status
//! - `todo_request_duration_seconds` (histogram): latency by method, route
//! - `todo_items_created_total` (counter): items added, by target kind
//! - `todo_items_deleted_total` (counter): items removed, by target kind
//! - `todo_lists_created_total` (counter): lists created on first visit

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

use crate::model::ListTarget;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished HTTP request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    metrics::counter!(
        "todo_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "todo_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_item_created(target: &ListTarget) {
    metrics::counter!("todo_items_created_total", "target" => target.kind()).increment(1);
}

pub fn record_item_deleted(target: &ListTarget) {
    metrics::counter!("todo_items_deleted_total", "target" => target.kind()).increment(1);
}

pub fn record_list_created() {
    metrics::counter!("todo_lists_created_total").increment(1);
}
