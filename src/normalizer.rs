//! # Text Normalizer
//!
//! Strips locale noise from supplier text before token matching:
//! punctuation collapses to single spaces and comma decimal separators
//! become dots. Case is left alone; extractors decide how to fold it.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex =
        Regex::new(r"[^A-Za-z0-9]+").expect("Invalid non-alphanumeric regex pattern");
}

/// Replace every non-alphanumeric run with one space, collapse whitespace and trim.
///
/// # Examples
/// ```
/// use transformer_code::normalizer::normalize;
///
/// assert_eq!(normalize("  ONAN/ONAF -- 10kV "), "ONAN ONAF 10kV");
/// assert_eq!(normalize("..."), "");
/// ```
pub fn normalize(text: &str) -> String {
    let replaced = NON_ALPHANUMERIC.replace_all(text, " ");
    let cleaned = replaced.split_whitespace().collect::<Vec<&str>>().join(" ");
    trace!("Normalized text: '{}' -> '{}'", text, cleaned);
    cleaned
}

/// Same as [`normalize`] with every space removed, for keywords that
/// suppliers write either split or glued ("OIL FILLED", "OILFILLED").
pub fn compact(text: &str) -> String {
    NON_ALPHANUMERIC.replace_all(text, "").into_owned()
}

/// Turn a locale decimal separator into a dot ("6,3" -> "6.3").
pub fn normalize_decimal(token: &str) -> String {
    token.trim().replace(',', ".")
}

/// Parse a numeric token written with either decimal separator.
pub fn parse_number(token: &str) -> Option<f64> {
    normalize_decimal(token)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_punctuation() {
        assert_eq!(normalize("Cast-Resin, AN/AF"), "Cast Resin AN AF");
        assert_eq!(normalize("a\t\tb\n c"), "a b c");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_keeps_case() {
        assert_eq!(normalize("onan ONAF"), "onan ONAF");
    }

    #[test]
    fn test_normalize_replaces_non_ascii() {
        assert_eq!(normalize("6,3 kV ± 2"), "6 3 kV 2");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact("Oil - Filled"), "OilFilled");
        assert_eq!(compact("  "), "");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("6,3"), Some(6.3));
        assert_eq!(parse_number("4.16"), Some(4.16));
        assert_eq!(parse_number("2.0e4"), Some(20000.0));
        assert_eq!(parse_number("abc"), None);
    }
}
