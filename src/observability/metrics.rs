//! Metrics collection and exposition.
//!
//! # Metrics
//! - `fanout_log_events_total` (counter): events constructed, by level
//! - `fanout_log_target_failures_total` (counter): isolated sink failures, by target
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Exporter is opt-in from the binary

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::model::Level;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Count one constructed event.
pub fn record_event(level: Level) {
    counter!("fanout_log_events_total", "level" => level.name().unwrap_or("OTHER")).increment(1);
}

/// Count one failed delivery.
pub fn record_target_failure(target: &str) {
    counter!("fanout_log_target_failures_total", "target" => target.to_string()).increment(1);
}
