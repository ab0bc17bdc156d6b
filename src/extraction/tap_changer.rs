//! Tap changer type: on-load (OLTC) or de-energized (DETC).

use crate::attributes::Attribute;
use crate::rules::{Rule, RuleSet};
use lazy_static::lazy_static;
use tracing::debug;

pub const ON_LOAD: Attribute = Attribute::resolved("On Load Tap Changer", "1");
pub const DE_ENERGIZED: Attribute = Attribute::resolved("De-Energized Tap Changer", "0");

const ON_LOAD_PATTERNS: [&str; 9] = [
    r"\boltc\b",
    r"\boltp\b",
    r"on\s*-?load",
    r"onload",
    r"\bon[-\s]?load[-\s]?tap\b",
    r"on\s*-?load\s*-?tap\s*-?changer",
    r"on\s*load\s*changer",
    r"load\s*tap\s*changer",
    r"\bon\s*load\s*tap\s*changer\b",
];

const DE_ENERGIZED_PATTERNS: [&str; 9] = [
    r"\bdtc\b",
    r"\bdetc\b",
    r"\bdenergized\b",
    r"de[-\s]?energized",
    r"degenerized",
    r"off\s*-?load",
    r"off\s*-?load\s*-?tap\s*-?changer",
    r"\boff[-\s]?load[-\s]?tap\b",
    r"off\s*load\s*changer",
];

lazy_static! {
    // On-load patterns come first so text naming both resolves to on-load
    static ref TAP_CHANGER_RULES: RuleSet<Attribute> = RuleSet::new(
        ON_LOAD_PATTERNS
            .iter()
            .map(|pattern| Rule::new("on_load", &format!("(?i){}", pattern), ON_LOAD))
            .chain(DE_ENERGIZED_PATTERNS.iter().map(|pattern| {
                Rule::new("de_energized", &format!("(?i){}", pattern), DE_ENERGIZED)
            }))
            .collect()
    );
}

/// Detect the tap changer. Blank or unmatched text defaults to de-energized.
pub fn detect_tap_changer(text: &str) -> Attribute {
    if text.trim().is_empty() {
        return DE_ENERGIZED;
    }

    match TAP_CHANGER_RULES.first_match(text) {
        Some(rule) => {
            debug!(rule = rule.name, pattern = %rule.pattern, "Tap changer matched");
            rule.outcome
        }
        None => DE_ENERGIZED,
    }
}
