//! Enclosure classification: indoor, outdoor, marine or hazardous area.

use crate::attributes::Attribute;
use crate::rules::{word_literal, Rule, RuleSet};
use lazy_static::lazy_static;
use tracing::debug;

pub const INDOOR: Attribute = Attribute::resolved("Indoor", "0");
pub const OUTDOOR: Attribute = Attribute::resolved("Outdoor", "1");
pub const MARINE: Attribute = Attribute::resolved("Marine", "2");
pub const ZONE_2: Attribute = Attribute::resolved("Zone-2", "3");

/// Keywords in priority order, matched case-insensitively as whole words
pub const CLASSIFICATION_KEYWORDS: [(&str, Attribute); 36] = [
    ("indoor", INDOOR),
    ("inside", INDOOR),
    ("enclosed", INDOOR),
    ("internal", INDOOR),
    ("sealed", INDOOR),
    ("climate controlled", INDOOR),
    ("protected location", INDOOR),
    ("outdoor", OUTDOOR),
    ("external", OUTDOOR),
    ("outside", OUTDOOR),
    ("weatherproof", OUTDOOR),
    ("exposed", OUTDOOR),
    ("harsh environment", OUTDOOR),
    ("all-weather", OUTDOOR),
    ("IP-rated", OUTDOOR),
    ("marine", MARINE),
    ("offshore", MARINE),
    ("shipboard", MARINE),
    ("naval", MARINE),
    ("seaworthy", MARINE),
    ("vessel", MARINE),
    ("corrosion-resistant", MARINE),
    ("coastal", MARINE),
    ("dockside", MARINE),
    ("maritime", MARINE),
    ("zone-2", ZONE_2),
    ("hazardous area", ZONE_2),
    ("explosion-proof", ZONE_2),
    ("ex-proof", ZONE_2),
    ("atex", ZONE_2),
    ("iecex", ZONE_2),
    ("intrinsically safe", ZONE_2),
    ("flammable environment", ZONE_2),
    ("gas group", ZONE_2),
    ("class 1 div 2", ZONE_2),
    ("oil & gas", ZONE_2),
];

lazy_static! {
    static ref CLASSIFICATION_RULES: RuleSet<Attribute> = RuleSet::new(
        CLASSIFICATION_KEYWORDS
            .iter()
            .map(|&(keyword, class)| Rule::new(keyword, &word_literal(keyword), class))
            .collect()
    );
}

/// Detect the enclosure classification. Defaults to outdoor.
pub fn detect_classification(text: &str) -> Attribute {
    match CLASSIFICATION_RULES.first_match(text) {
        Some(rule) => {
            debug!(keyword = rule.name, "Classification matched");
            rule.outcome
        }
        None => OUTDOOR,
    }
}
