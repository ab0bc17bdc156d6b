//! Governing standard. Keywords may carry a glued designation number
//! ("IEC60076-11", "UL1562").

use crate::attributes::Attribute;
use crate::rules::{designation_group, Rule, RuleSet};
use lazy_static::lazy_static;
use tracing::debug;

pub const IEC: Attribute = Attribute::resolved("IEC", "0");

lazy_static! {
    static ref STANDARD_RULES: RuleSet<Attribute> = RuleSet::new(vec![
        Rule::new(
            "iec",
            &designation_group(&[
                "iec",
                r"international\s*electrotechnical\s*commission",
                r"euro\s*standard",
                r"en\s*\d{4}",
            ]),
            IEC,
        ),
        Rule::new(
            "ansi",
            &designation_group(&[
                "ansi",
                r"american\s*national\s*standards\s*institute",
                "ieee",
                r"ul\s*\d{3,4}",
            ]),
            Attribute::resolved("ANSI", "1"),
        ),
        Rule::new(
            "csa",
            &designation_group(&[
                "csa",
                r"canadian\s*standards\s*association",
                r"csa\s*c\d{2,4}",
                r"canadian\s*electrical\s*code",
            ]),
            Attribute::resolved("CSA", "2"),
        ),
        Rule::new(
            "eac",
            &designation_group(&[
                "eac",
                r"eurasian\s*economic\s*commission",
                "gost",
                r"tr\s*cu",
                r"eurasian\s*certification",
            ]),
            Attribute::resolved("EAC", "3"),
        ),
        Rule::new(
            "jec",
            &designation_group(&[
                "jec",
                r"japanese\s*electrotechnical\s*committee",
                "jis",
                r"japan\s*standard",
                r"jec\s*\d{3,4}",
            ]),
            Attribute::resolved("JEC", "4"),
        ),
        Rule::new(
            "non_standard",
            &designation_group(&[
                "xxx",
                r"non\s*standard",
                r"custom\s*specification",
                r"special\s*design",
                r"proprietary\s*standard",
            ]),
            Attribute::resolved("XXX", "5"),
        ),
    ]);
}

/// Rule names in the order they are tried
pub fn standard_rule_names() -> Vec<&'static str> {
    STANDARD_RULES.names()
}

/// Detect the governing standard. Defaults to IEC.
pub fn detect_standard(text: &str) -> Attribute {
    match STANDARD_RULES.first_match(text) {
        Some(rule) => {
            debug!(rule = rule.name, "Standard matched");
            rule.outcome
        }
        None => IEC,
    }
}
