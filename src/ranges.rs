//! # Range Classifiers
//!
//! Map a magnitude onto an ordered table of half-open `[lower, upper)`
//! buckets. A value sitting exactly on a boundary belongs to the upper bucket.

use crate::attributes::Attribute;

/// A labelled half-open interval
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    pub lower: f64,
    pub upper: f64,
    pub label: &'static str,
    pub code: &'static str,
}

impl Bucket {
    const fn new(lower: f64, upper: f64, label: &'static str, code: &'static str) -> Self {
        Self {
            lower,
            upper,
            label,
            code,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value < self.upper
    }
}

/// Power bands in MVA, low to high
pub const POWER_BUCKETS: [Bucket; 6] = [
    Bucket::new(0.0, 1.0, "0-1 MVA", "0"),
    Bucket::new(1.0, 10.0, "1-10 MVA", "1"),
    Bucket::new(10.0, 50.0, "10-50 MVA", "2"),
    Bucket::new(50.0, 100.0, "50-100 MVA", "3"),
    Bucket::new(100.0, 250.0, "100-250 MVA", "4"),
    Bucket::new(250.0, f64::INFINITY, ">250 MVA", "5"),
];

/// Primary voltage bands in kV, low to high
pub const VOLTAGE_BUCKETS: [Bucket; 4] = [
    Bucket::new(f64::NEG_INFINITY, 36.0, "<36 kV", "0"),
    Bucket::new(36.0, 110.0, "36-110 kV", "1"),
    Bucket::new(110.0, 220.0, "110-220 kV", "2"),
    Bucket::new(220.0, f64::INFINITY, ">220 kV", "3"),
];

/// First bucket containing the value; NaN and out-of-table values stay unresolved.
pub fn classify(buckets: &[Bucket], value: f64) -> Attribute {
    buckets
        .iter()
        .find(|bucket| bucket.contains(value))
        .map(|bucket| Attribute::resolved(bucket.label, bucket.code))
        .unwrap_or(Attribute::Unresolved)
}

/// Classify an apparent power in MVA
///
/// # Examples
/// ```
/// use transformer_code::ranges::classify_power;
///
/// assert_eq!(classify_power(2.3).code(), "1");
/// assert_eq!(classify_power(250.0).code(), "5");
/// ```
pub fn classify_power(mva: f64) -> Attribute {
    classify(&POWER_BUCKETS, mva)
}

/// Classify a primary voltage in kV
pub fn classify_voltage(kv: f64) -> Attribute {
    classify(&VOLTAGE_BUCKETS, kv)
}
