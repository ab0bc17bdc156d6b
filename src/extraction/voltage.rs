//! # Primary Voltage
//!
//! Suppliers write primary voltages in many shapes: slash lists in kV or V,
//! mixed V/kV pairs, tolerance-qualified ratings, labelled "Primary"/"HV"
//! fields and the occasional exponent notation. Each shape is a rule that
//! reads one kV magnitude from its match; the cascade stops at the first
//! rule producing a value and the magnitude is then bucketed.

use crate::attributes::Attribute;
use crate::normalizer::parse_number;
use crate::ranges::classify_voltage;
use crate::rules::{Rule, RuleSet};
use crate::units::voltage_to_kv;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

/// Reads a kV magnitude from a rule match. `None` rejects the match and the
/// cascade moves on to the next occurrence.
pub type VoltageReader = fn(&str, &Captures) -> Option<f64>;

/// Decimal number with either separator
const NUM: &str = r"\d+(?:[.,]\d+)?";
/// Number that may carry an exponent
const EXP_NUM: &str = r"\d+(?:[.,]\d+)?(?:[eE][+\-]?\d+)?";

lazy_static! {
    // List member, skipping a winding multiplier such as "2x" in "2x502V"
    static ref LIST_VALUE: Regex = Regex::new(r"(?:\d+\s*[xX]\s*)?(\d+(?:[.,]\d+)?)")
        .expect("Invalid voltage list value regex pattern");

    static ref KV_MARKER: Regex = Regex::new(r"[kK]V").expect("Invalid kV marker regex pattern");

    static ref VOLTAGE_RULES: RuleSet<VoltageReader> = RuleSet::new(vec![
        Rule::new(
            "exponent_pair",
            &format!(
                r"\b(?P<a>{e})\s*/\s*(?P<b>{e})\s*(?P<unit>[kK]?V)\b",
                e = EXP_NUM
            ),
            read_exponent_pair as VoltageReader,
        ),
        Rule::new(
            "kv_list",
            &format!(
                r"\b(?:\d+\s*[xX]\s*)?(?:{n}(?:\s*[kK]V)?\s*/\s*(?:\d+\s*[xX]\s*)?)+{n}\s*[kK]V\b",
                n = NUM
            ),
            read_kv_list as VoltageReader,
        ),
        Rule::new(
            "v_list",
            &format!(r"\b(?:{n}\s*V?\s*/\s*(?:\d+\s*[xX]\s*)?)+{n}\s*V\b", n = NUM),
            read_v_list as VoltageReader,
        ),
        Rule::new(
            "mixed_pair",
            &format!(
                r"\b(?P<a>{n})\s*(?P<ua>[kK]?V)\s*/\s*(?P<b>{n})\s*(?P<ub>[kK]?V)\b",
                n = NUM
            ),
            read_mixed_pair as VoltageReader,
        ),
        Rule::new(
            "kv_tolerance",
            &format!(r"\b(?P<v>{n})\s*[kK]V\s*[±\-]", n = NUM),
            read_kv as VoltageReader,
        ),
        Rule::new(
            "standalone_v",
            &format!(r"\b(?P<v>{n})\s*V\b", n = NUM),
            read_v_without_kv_after as VoltageReader,
        ),
        Rule::new(
            "primary_v",
            &format!(r"\b(?i:primary)\s*:?\s*(?P<v>{n})\s*V\b", n = NUM),
            read_v as VoltageReader,
        ),
        Rule::new(
            "primary_kv",
            &format!(r"\b(?i:primary)\s*:?\s*(?P<v>{n})\s*[kK]V\b", n = NUM),
            read_kv as VoltageReader,
        ),
        Rule::new(
            "hv_v",
            &format!(r"\bHV\s*:?\s*(?P<v>{n})\s*V\b", n = NUM),
            read_v as VoltageReader,
        ),
        Rule::new(
            "hv_kv",
            &format!(r"\bHV\s*:?\s*(?P<v>{n})\s*(?:\[[kK]V\]|[kK]V)", n = NUM),
            read_kv as VoltageReader,
        ),
        Rule::new(
            "hv_bracket_v",
            &format!(r"\bHV\s*:?\s*(?P<v>{n})\s*\[V\]", n = NUM),
            read_v as VoltageReader,
        ),
        Rule::new(
            "standalone_kv",
            &format!(r"\b(?P<v>{n})\s*[kK]V\b", n = NUM),
            read_kv as VoltageReader,
        ),
    ]);
}

fn group(caps: &Captures, name: &str) -> Option<f64> {
    caps.name(name).and_then(|m| parse_number(m.as_str()))
}

/// Convert a value according to the unit written next to it
fn to_kv(value: f64, unit: &str) -> f64 {
    if unit.eq_ignore_ascii_case("kv") {
        value
    } else {
        voltage_to_kv(value)
    }
}

fn list_max(matched: &str) -> Option<f64> {
    LIST_VALUE
        .captures_iter(matched)
        .filter_map(|caps| caps.get(1).and_then(|m| parse_number(m.as_str())))
        .reduce(f64::max)
}

fn read_kv(_text: &str, caps: &Captures) -> Option<f64> {
    group(caps, "v")
}

fn read_v(_text: &str, caps: &Captures) -> Option<f64> {
    group(caps, "v").map(voltage_to_kv)
}

fn read_kv_list(_text: &str, caps: &Captures) -> Option<f64> {
    list_max(caps.get(0)?.as_str())
}

fn read_v_list(_text: &str, caps: &Captures) -> Option<f64> {
    list_max(caps.get(0)?.as_str()).map(voltage_to_kv)
}

fn read_mixed_pair(_text: &str, caps: &Captures) -> Option<f64> {
    let a = to_kv(group(caps, "a")?, caps.name("ua")?.as_str());
    let b = to_kv(group(caps, "b")?, caps.name("ub")?.as_str());
    Some(a.max(b))
}

/// Pairs without an exponent on either side are left to the list rules.
fn read_exponent_pair(_text: &str, caps: &Captures) -> Option<f64> {
    let has_exponent = ["a", "b"]
        .iter()
        .filter_map(|name| caps.name(name))
        .any(|m| m.as_str().contains(['e', 'E']));
    if !has_exponent {
        return None;
    }
    let unit = caps.name("unit")?.as_str();
    let a = to_kv(group(caps, "a")?, unit);
    let b = to_kv(group(caps, "b")?, unit);
    Some(a.max(b))
}

/// A bare volt value only counts when no kV rating follows on the same line.
fn read_v_without_kv_after(text: &str, caps: &Captures) -> Option<f64> {
    let end = caps.get(0)?.end();
    let rest_of_line = text[end..].split('\n').next().unwrap_or_default();
    if KV_MARKER.is_match(rest_of_line) {
        return None;
    }
    read_v(text, caps)
}

/// Rule names in the order they are tried
pub fn voltage_rule_names() -> Vec<&'static str> {
    VOLTAGE_RULES.names()
}

/// Primary voltage in kV from the first rule that yields a value
pub fn find_primary_voltage_kv(text: &str) -> Option<f64> {
    for rule in VOLTAGE_RULES.rules() {
        for caps in rule.pattern.captures_iter(text) {
            if let Some(kv) = (rule.outcome)(text, &caps) {
                debug!(rule = rule.name, kv, "Primary voltage extracted");
                return Some(kv);
            }
        }
    }
    None
}

/// Detect the primary voltage band. Unresolved when no rule matches.
pub fn extract_primary_voltage(text: &str) -> Attribute {
    find_primary_voltage_kv(text)
        .map(classify_voltage)
        .unwrap_or(Attribute::Unresolved)
}
