//! # Transformer Code Generator
//!
//! Classifies free-text equipment specifications (supplier datasheet lines)
//! into a fixed set of categorical attributes and a concatenated product
//! code, using deterministic pattern tables.

pub mod aggregator;
pub mod attributes;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod input;
pub mod normalizer;
pub mod observability;
pub mod observability_config;
pub mod ranges;
pub mod report;
pub mod rules;
pub mod units;
pub mod validation;

// Re-export types for easier access
pub use aggregator::extract_attributes;
pub use attributes::{Attribute, AttributeRecord, Classification, Dimension, ProductCode};
