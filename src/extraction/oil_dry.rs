//! # Cooling / Insulation Medium
//!
//! Two passes over an upper-cased, normalized copy of the text:
//!
//! 1. IEC cooling-class codes (ONAN, KNAF, AFWF, ...) as whole words. The
//!    normalizer turns "ONAN/ONAF" into separate tokens while keeping "SPAN"
//!    from yielding "AN".
//! 2. Medium keywords ("CAST RESIN", "VPI", "ESTER", ...) as plain
//!    substrings. Multi-word keywords also match when written glued
//!    together ("OILFILLED").
//!
//! Non-blank text matching neither pass is assumed to be mineral oil.

use crate::attributes::Attribute;
use crate::normalizer::{compact, normalize};
use crate::rules::{Rule, RuleSet};
use lazy_static::lazy_static;
use tracing::debug;

pub const MINERAL_OIL: Attribute = Attribute::resolved("Mineral Oil", "0");
pub const ESTER_OIL: Attribute = Attribute::resolved("Ester Oil", "1");
pub const DRY_TYPE: Attribute = Attribute::resolved("Dry Type", "2");
pub const VPI_DRY: Attribute = Attribute::resolved("VPI Dry", "3");
pub const GAS_FILLED: Attribute = Attribute::resolved("Gas Filled", "4");
pub const CAST_RESIN_DRY: Attribute = Attribute::resolved("Cast Resin Dry", "5");

/// Cooling-class codes in priority order
pub const COOLING_CODES: [(&str, Attribute); 16] = [
    ("AN", DRY_TYPE),
    ("AF", DRY_TYPE),
    ("ANAF", DRY_TYPE),
    ("ANAN", DRY_TYPE),
    ("AA", DRY_TYPE),
    ("AFWF", GAS_FILLED),
    ("KFWF", ESTER_OIL),
    ("KNAF", ESTER_OIL),
    ("KNAN", ESTER_OIL),
    ("ODAF", MINERAL_OIL),
    ("OFAF", MINERAL_OIL),
    ("OFAN", MINERAL_OIL),
    ("OFWF", MINERAL_OIL),
    ("ONAF", MINERAL_OIL),
    ("ONAN", MINERAL_OIL),
    ("ONWN", MINERAL_OIL),
];

/// Medium keywords tried after the cooling codes, in priority order
pub const MEDIUM_KEYWORDS: [(&str, Attribute); 12] = [
    ("FR3", ESTER_OIL),
    ("CAST RESIN", CAST_RESIN_DRY),
    ("RESIBLOC", CAST_RESIN_DRY),
    ("VPI", VPI_DRY),
    ("VACUUM PRESSURE IMPREGNATION", VPI_DRY),
    ("DRY", DRY_TYPE),
    ("AA", DRY_TYPE),
    ("OIL FILLED", MINERAL_OIL),
    ("AFWF", GAS_FILLED),
    ("ESTER", ESTER_OIL),
    ("MINERAL", MINERAL_OIL),
    ("GAS FILLED", GAS_FILLED),
];

lazy_static! {
    static ref COOLING_CODE_RULES: RuleSet<Attribute> = RuleSet::new(
        COOLING_CODES
            .iter()
            .map(|&(code, medium)| Rule::new(code, &format!(r"\b{}\b", code), medium))
            .collect()
    );
}

fn keyword_present(keyword: &str, cleaned: &str, glued: &str) -> bool {
    if cleaned.contains(keyword) {
        return true;
    }
    keyword.contains(' ') && glued.contains(&keyword.replace(' ', ""))
}

/// Detect the cooling/insulation medium.
///
/// Blank text is unresolved; otherwise defaults to mineral oil.
pub fn detect_oil_type(text: &str) -> Attribute {
    let cleaned = normalize(&text.to_uppercase());
    if cleaned.is_empty() {
        return Attribute::Unresolved;
    }

    if let Some(rule) = COOLING_CODE_RULES.first_match(&cleaned) {
        debug!(cooling_code = rule.name, "Oil/Dry matched cooling code");
        return rule.outcome;
    }

    let glued = compact(&cleaned);
    if let Some((keyword, medium)) = MEDIUM_KEYWORDS
        .iter()
        .find(|(keyword, _)| keyword_present(keyword, &cleaned, &glued))
    {
        debug!(keyword = %keyword, "Oil/Dry matched medium keyword");
        return *medium;
    }

    MINERAL_OIL
}
