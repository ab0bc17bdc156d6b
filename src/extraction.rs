//! # Dimension Extractors
//!
//! One recognizer per dimension. Each is a total, side-effect-free function
//! from raw supplier text to an [`Attribute`]: rules are tried in a fixed
//! priority order, the first hit wins, and a documented default (or the
//! unresolved sentinel) covers text that matches nothing.
//!
//! Extractors share no state and never read each other's results, so the
//! aggregator may call them in any order.

pub mod application;
pub mod classification;
pub mod oil_dry;
pub mod power;
pub mod product_type;
pub mod standard;
pub mod system_category;
pub mod tap_changer;
pub mod voltage;
pub mod winding;

use crate::attributes::{Attribute, Dimension};

pub use application::detect_application;
pub use classification::detect_classification;
pub use oil_dry::detect_oil_type;
pub use power::detect_power;
pub use product_type::detect_product_type;
pub use standard::detect_standard;
pub use system_category::detect_system_category;
pub use tap_changer::detect_tap_changer;
pub use voltage::extract_primary_voltage;
pub use winding::detect_winding_material;

/// Signature shared by every extractor
pub type Extractor = fn(&str) -> Attribute;

/// Extractor for each dimension, in [`Dimension::ALL`] order
pub const EXTRACTORS: [(Dimension, Extractor); Dimension::COUNT] = [
    (Dimension::ProductType, detect_product_type),
    (Dimension::Power, detect_power),
    (Dimension::PrimaryVoltage, extract_primary_voltage),
    (Dimension::TapChanger, detect_tap_changer),
    (Dimension::Application, detect_application),
    (Dimension::SystemCategory, detect_system_category),
    (Dimension::OilDry, detect_oil_type),
    (Dimension::Classification, detect_classification),
    (Dimension::Standard, detect_standard),
    (Dimension::WindingMaterial, detect_winding_material),
];

/// Run the extractor registered for a single dimension
pub fn extract(dimension: Dimension, text: &str) -> Attribute {
    (EXTRACTORS[dimension.index()].1)(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractors_follow_dimension_order() {
        for (position, (dimension, _)) in EXTRACTORS.iter().enumerate() {
            assert_eq!(Dimension::ALL[position], *dimension);
        }
    }

    #[test]
    fn test_extract_dispatches_by_dimension() {
        assert_eq!(extract(Dimension::Standard, "ANSI C57").label(), "ANSI");
        assert_eq!(extract(Dimension::WindingMaterial, "copper").label(), "Cu");
    }
}
