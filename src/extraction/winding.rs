//! Winding conductor material. Copper wins when both metals are named.

use crate::attributes::Attribute;
use crate::rules::{word_group, Rule, RuleSet};
use lazy_static::lazy_static;
use tracing::debug;

pub const COPPER: Attribute = Attribute::resolved("Cu", "0");
pub const ALUMINIUM: Attribute = Attribute::resolved("Al", "1");

const CONDUCTOR_FORMS: &str = r"(?:winding|coil|wire|conductor|foil|busbar)";

lazy_static! {
    static ref WINDING_RULES: RuleSet<Attribute> = RuleSet::new(vec![
        Rule::new(
            "copper",
            &word_group(&[format!(r"(?:cu|copper)(?:\s*{})?", CONDUCTOR_FORMS).as_str()]),
            COPPER,
        ),
        Rule::new(
            "aluminium",
            &word_group(&[
                format!(r"(?:al|alu|aluminum|aluminium)(?:\s*{})?", CONDUCTOR_FORMS).as_str(),
                "minium",
            ]),
            ALUMINIUM,
        ),
    ]);
}

/// Detect the winding material. Unresolved when neither metal is named.
pub fn detect_winding_material(text: &str) -> Attribute {
    match WINDING_RULES.first_match(text) {
        Some(rule) => {
            debug!(rule = rule.name, "Winding material matched");
            rule.outcome
        }
        None => Attribute::Unresolved,
    }
}
