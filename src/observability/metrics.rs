//! Metrics collection and Prometheus export module.
//!
//! Recording functions are no-ops until a recorder is installed, so the
//! library can be used without any metrics setup.

use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

use crate::attributes::Classification;

/// Install the global Prometheus recorder and return a handle for rendering
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}

/// Record one completed classification
pub fn record_classification_metrics(classification: &Classification, duration: Duration) {
    let result = if classification.record.is_complete() {
        "complete"
    } else {
        "partial"
    };
    metrics::counter!("classifications_total", "result" => result).increment(1);
    metrics::histogram!("classification_duration_seconds").record(duration.as_secs_f64());

    for (dimension, attribute) in classification.record.iter() {
        let outcome = if attribute.is_resolved() {
            "resolved"
        } else {
            "unresolved"
        };
        metrics::counter!(
            "dimension_resolutions_total",
            "dimension" => dimension.metric_name(),
            "result" => outcome
        )
        .increment(1);
    }
}

/// Record a batch run
pub fn record_batch_metrics(lines: usize, duration: Duration) {
    metrics::counter!("batch_runs_total").increment(1);
    metrics::histogram!("batch_size_lines").record(lines as f64);
    metrics::histogram!("batch_duration_seconds").record(duration.as_secs_f64());
}

/// Record error metrics
pub fn record_error_metrics(error_type: &str, component: &str) {
    let error_type = error_type.to_string();
    let component = component.to_string();
    metrics::counter!("errors_total", "type" => error_type, "component" => component).increment(1);
}
