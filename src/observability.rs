//! Observability module for tracing, logging and metrics setup.
//!
//! This module provides:
//! - Structured logging with configurable levels and formats
//! - Metrics collection with an in-process Prometheus recorder
//! - Span helpers for the classification path

pub mod metrics;
pub mod tracing_mod;

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::observability_config::ObservabilityConfig;

/// Initialize logging and, when enabled, the metrics recorder.
///
/// Returns the Prometheus handle so the caller can render a snapshot.
pub fn init_observability_with_config(
    config: &ObservabilityConfig,
    force_metrics: bool,
) -> Result<Option<PrometheusHandle>> {
    tracing_mod::init_tracing_with_config(config)?;

    if config.enable_metrics_export || force_metrics {
        let handle = metrics::init_metrics()?;
        tracing::info!("Prometheus metrics recorder installed");
        Ok(Some(handle))
    } else {
        tracing::debug!("Metrics export disabled");
        Ok(None)
    }
}

/// Span wrapping one classification request
pub fn classification_span(source: &str, batch_size: usize) -> tracing::Span {
    tracing::info_span!("classification", source = %source, batch_size = batch_size)
}
