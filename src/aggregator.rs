//! # Attribute Aggregator
//!
//! Runs every dimension extractor against the same supplier text, gathers
//! the results into an [`AttributeRecord`] and renders the product code.
//! Extractors are total, so aggregation cannot fail on any input.

use crate::attributes::{AttributeRecord, Classification};
use crate::extraction::EXTRACTORS;
use crate::observability::metrics::record_classification_metrics;
use std::time::Instant;
use tracing::{debug, info};

/// Classify one supplier text.
///
/// # Examples
/// ```
/// use transformer_code::aggregator::extract_attributes;
/// use transformer_code::attributes::Dimension;
///
/// let result = extract_attributes("Oil Distribution Transformer - 2300kVA - 10kV/0.4kV - AL - ONAN - IEC");
/// assert_eq!(result.record.get(Dimension::ProductType).label(), "02-Transformer");
/// assert!(result.product_code.as_str().starts_with("4JZZ"));
/// ```
pub fn extract_attributes(text: &str) -> Classification {
    let start_time = Instant::now();

    let values = EXTRACTORS.map(|(dimension, extractor)| {
        let attribute = extractor(text);
        debug!(
            dimension = dimension.metric_name(),
            label = attribute.label(),
            code = attribute.code(),
            "Dimension resolved"
        );
        attribute
    });

    let classification = Classification::new(AttributeRecord::from_values(values));
    let duration = start_time.elapsed();
    record_classification_metrics(&classification, duration);

    info!(
        product_code = %classification.product_code,
        unresolved = classification.record.unresolved().len(),
        text_length = text.len(),
        duration_us = duration.as_micros() as u64,
        "Supplier text classified"
    );

    classification
}
