//! Power rating: a number next to a power unit, converted to MVA and bucketed.

use crate::attributes::Attribute;
use crate::normalizer::parse_number;
use crate::ranges::classify_power;
use crate::units::power_to_mva;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    // Unit before the number ("MVA: 40") or after it ("2300kVA", "40 [MVA]").
    // Both branches capture a unit; a bare number is not a rating.
    static ref POWER_PATTERN: Regex = Regex::new(
        r"(?i)\b(?P<lead_unit>kVA|MVA|kW|VA|W)\b\s*:?\s*(?P<lead_value>\d+(?:[.,]\d+)?)|\b(?P<value>\d+(?:[.,]\d+)?)\s*\[?(?P<unit>kVA|MVA|kW|VA|W)\b\]?"
    )
    .expect("Invalid power rating regex pattern");
}

/// First power rating in the text, converted to MVA
pub fn find_power_mva(text: &str) -> Option<f64> {
    let caps = POWER_PATTERN.captures(text)?;

    let (value, unit) = match caps.name("lead_value") {
        Some(value) => (value, caps.name("lead_unit")?),
        None => (caps.name("value")?, caps.name("unit")?),
    };
    let unit = unit.as_str();
    let value = parse_number(value.as_str())?;

    let mva = power_to_mva(value, unit);
    debug!(value, unit, mva = ?mva, "Power rating located");
    mva
}

/// Detect the power band. Unresolved when no rating is found.
pub fn detect_power(text: &str) -> Attribute {
    find_power_mva(text)
        .map(classify_power)
        .unwrap_or(Attribute::Unresolved)
}
