//! # Attribute Record
//!
//! The fixed set of classified dimensions, their `(label, code)` values and
//! the product code rendered from them.
//!
//! Dimension order is part of the output format: codes are concatenated in
//! [`Dimension::ALL`] order after [`PRODUCT_CODE_PREFIX`].

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;

/// Literal every product code starts with
pub const PRODUCT_CODE_PREFIX: &str = "4JZZ";

/// Label shown for a dimension that could not be resolved
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Code rendered for a dimension that could not be resolved
pub const UNKNOWN_CODE: &str = "";

/// One classified attribute of the equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    ProductType,
    Power,
    PrimaryVoltage,
    TapChanger,
    Application,
    SystemCategory,
    OilDry,
    Classification,
    Standard,
    WindingMaterial,
}

impl Dimension {
    /// Number of dimensions in every record
    pub const COUNT: usize = 10;

    /// All dimensions in code concatenation order
    pub const ALL: [Dimension; Dimension::COUNT] = [
        Dimension::ProductType,
        Dimension::Power,
        Dimension::PrimaryVoltage,
        Dimension::TapChanger,
        Dimension::Application,
        Dimension::SystemCategory,
        Dimension::OilDry,
        Dimension::Classification,
        Dimension::Standard,
        Dimension::WindingMaterial,
    ];

    /// Human readable key used in tables and JSON output
    pub fn key(self) -> &'static str {
        match self {
            Dimension::ProductType => "Product type",
            Dimension::Power => "Power in MVA",
            Dimension::PrimaryVoltage => "Primary Voltage in kV",
            Dimension::TapChanger => "Tap Changer",
            Dimension::Application => "Application",
            Dimension::SystemCategory => "System Category",
            Dimension::OilDry => "Oil/Dry",
            Dimension::Classification => "Classification",
            Dimension::Standard => "Standard",
            Dimension::WindingMaterial => "Winding material",
        }
    }

    /// Short snake_case name used as a metrics/log label
    pub fn metric_name(self) -> &'static str {
        match self {
            Dimension::ProductType => "product_type",
            Dimension::Power => "power",
            Dimension::PrimaryVoltage => "primary_voltage",
            Dimension::TapChanger => "tap_changer",
            Dimension::Application => "application",
            Dimension::SystemCategory => "system_category",
            Dimension::OilDry => "oil_dry",
            Dimension::Classification => "classification",
            Dimension::Standard => "standard",
            Dimension::WindingMaterial => "winding_material",
        }
    }

    /// Position of this dimension in [`Dimension::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Value of a single dimension.
///
/// Unresolved is kept apart from real codes so a sentinel can never be
/// mistaken for a classification; it only becomes `"Unknown"`/`""` when
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// A value from the dimension's fixed vocabulary
    Resolved {
        label: &'static str,
        code: &'static str,
    },
    /// No rule matched and the dimension has no default
    Unresolved,
}

impl Attribute {
    pub const fn resolved(label: &'static str, code: &'static str) -> Self {
        Attribute::Resolved { label, code }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Resolved { label, .. } => label,
            Attribute::Unresolved => UNKNOWN_LABEL,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Attribute::Resolved { code, .. } => code,
            Attribute::Unresolved => UNKNOWN_CODE,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Attribute::Resolved { .. })
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Attribute", 3)?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("resolved", &self.is_resolved())?;
        state.end()
    }
}

/// Every dimension mapped to its value, in fixed key order.
///
/// Built fresh per request and never mutated once handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    values: [Attribute; Dimension::COUNT],
}

impl AttributeRecord {
    /// Build a record from one value per dimension, in [`Dimension::ALL`] order
    pub fn from_values(values: [Attribute; Dimension::COUNT]) -> Self {
        Self { values }
    }

    /// Value for a dimension
    pub fn get(&self, dimension: Dimension) -> &Attribute {
        &self.values[dimension.index()]
    }

    /// Iterate over `(dimension, value)` in key order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &Attribute)> {
        Dimension::ALL.into_iter().zip(self.values.iter())
    }

    /// Dimensions that fell back to the unresolved sentinel
    pub fn unresolved(&self) -> Vec<Dimension> {
        self.iter()
            .filter(|(_, attribute)| !attribute.is_resolved())
            .map(|(dimension, _)| dimension)
            .collect()
    }

    /// Whether every dimension carries a real code
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Attribute::is_resolved)
    }

    /// Render the product code: prefix followed by every code in key order
    pub fn product_code(&self) -> ProductCode {
        let mut code = String::from(PRODUCT_CODE_PREFIX);
        for attribute in &self.values {
            code.push_str(attribute.code());
        }
        ProductCode(code)
    }
}

impl Serialize for AttributeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Dimension::COUNT))?;
        for (dimension, attribute) in self.iter() {
            map.serialize_entry(dimension.key(), attribute)?;
        }
        map.end()
    }
}

/// Concatenated classification code, e.g. `4JZZ02100000100`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of classifying one supplier text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub record: AttributeRecord,
    pub product_code: ProductCode,
}

impl Classification {
    pub fn new(record: AttributeRecord) -> Self {
        let product_code = record.product_code();
        Self {
            record,
            product_code,
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Classification", 3)?;
        state.serialize_field("attributes", &self.record)?;
        state.serialize_field("product_code", &self.product_code)?;
        let unresolved: Vec<&str> = self
            .record
            .unresolved()
            .into_iter()
            .map(Dimension::key)
            .collect();
        state.serialize_field("unresolved", &unresolved)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(overrides: &[(Dimension, Attribute)]) -> AttributeRecord {
        let mut values = [Attribute::Unresolved; Dimension::COUNT];
        for (dimension, attribute) in overrides {
            values[dimension.index()] = *attribute;
        }
        AttributeRecord::from_values(values)
    }

    #[test]
    fn test_dimension_order_matches_index() {
        for (position, dimension) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dimension.index(), position);
        }
    }

    #[test]
    fn test_unresolved_renders_sentinel() {
        let attribute = Attribute::Unresolved;
        assert_eq!(attribute.label(), "Unknown");
        assert_eq!(attribute.code(), "");
        assert!(!attribute.is_resolved());
    }

    #[test]
    fn test_product_code_concatenates_in_key_order() {
        let record = record_with(&[
            (Dimension::ProductType, Attribute::resolved("02-Transformer", "02")),
            (Dimension::SystemCategory, Attribute::resolved("Product", "A")),
            (Dimension::WindingMaterial, Attribute::resolved("Al", "1")),
        ]);
        assert_eq!(record.product_code().as_str(), "4JZZ02A1");
    }

    #[test]
    fn test_unresolved_listing() {
        let record = record_with(&[(Dimension::Standard, Attribute::resolved("IEC", "0"))]);
        let unresolved = record.unresolved();
        assert_eq!(unresolved.len(), Dimension::COUNT - 1);
        assert!(!unresolved.contains(&Dimension::Standard));
        assert!(!record.is_complete());
    }

    #[test]
    fn test_record_serializes_in_key_order() {
        let record = record_with(&[]);
        let json = serde_json::to_string(&record).unwrap();
        let product = json.find("Product type").unwrap();
        let winding = json.find("Winding material").unwrap();
        assert!(product < winding);
        assert!(json.contains(r#""code":"""#));
    }
}
