//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gate_decisions_total` (counter): guard decisions by `access`, `outcome`

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one route guard decision.
pub fn record_decision(access: &'static str, outcome: &'static str) {
    metrics::counter!("gate_decisions_total", "access" => access, "outcome" => outcome).increment(1);
}
