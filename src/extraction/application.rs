//! Application environment of the equipment.

use crate::attributes::Attribute;
use crate::rules::{Rule, RuleSet};
use lazy_static::lazy_static;
use tracing::debug;

pub const LAND_BASED: Attribute = Attribute::resolved("Land Based", "0");

lazy_static! {
    static ref APPLICATION_RULES: RuleSet<Attribute> = RuleSet::new(vec![
        Rule::new("land_based", r"(?i)land\s*based", LAND_BASED),
        Rule::new(
            "marine_offshore",
            r"(?i)marine\s*propulsion.*offshore",
            Attribute::resolved("Marine Propulsion O&G Offshore", "1"),
        ),
        Rule::new(
            "onshore",
            r"(?i)o&g\s*onshore|onshore",
            Attribute::resolved("O&G Onshore", "2"),
        ),
        Rule::new(
            "wind_offshore",
            r"(?i)wind\s*offshore",
            Attribute::resolved("Wind Offshore", "3"),
        ),
        Rule::new("atex", r"(?i)atex", Attribute::resolved("Atex", "4")),
    ]);
}

/// Rule names in the order they are tried
pub fn application_rule_names() -> Vec<&'static str> {
    APPLICATION_RULES.names()
}

/// Detect the application. Defaults to land based.
pub fn detect_application(text: &str) -> Attribute {
    match APPLICATION_RULES.first_match(text) {
        Some(rule) => {
            debug!(rule = rule.name, "Application matched");
            rule.outcome
        }
        None => LAND_BASED,
    }
}
