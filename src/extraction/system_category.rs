//! System category: software deliveries override everything else.

use crate::attributes::Attribute;
use lazy_static::lazy_static;
use regex::Regex;

pub const PRODUCT: Attribute = Attribute::resolved("Product", "A");
pub const SOFTWARE: Attribute = Attribute::resolved("Software", "S");

lazy_static! {
    static ref SOFTWARE_PATTERN: Regex =
        Regex::new(r"(?i)software").expect("Invalid software regex pattern");
}

pub fn detect_system_category(text: &str) -> Attribute {
    if SOFTWARE_PATTERN.is_match(text) {
        SOFTWARE
    } else {
        PRODUCT
    }
}
