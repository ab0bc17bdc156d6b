//! Equipment family detection by synonym lookup.

use crate::attributes::Attribute;
use tracing::debug;

/// A product family and the words suppliers use for it
#[derive(Debug, Clone, Copy)]
pub struct ProductCategory {
    pub label: &'static str,
    pub code: &'static str,
    /// Lower-case fragments searched anywhere in the text
    pub synonyms: &'static [&'static str],
}

/// Families in priority order; the first with any synonym present wins
pub const PRODUCT_CATEGORIES: [ProductCategory; 7] = [
    ProductCategory {
        label: "02-Transformer",
        code: "02",
        synonyms: &[
            "transformer",
            "trans",
            "transfo",
            "xfmr",
            "trafo",
            "ppt",
            "x'mer",
        ],
    },
    ProductCategory {
        label: "03-MV Switchgear",
        code: "03",
        synonyms: &["switchgear", "switch board", "switch cabinet", "mv switchgear"],
    },
    ProductCategory {
        label: "04-High Voltage Equipment",
        code: "04",
        synonyms: &["high voltage", "hv equipment", "hv", "high volt"],
    },
    ProductCategory {
        label: "05-E-House",
        code: "05",
        synonyms: &["e-house", "electrical house", "ehouse", "e house"],
    },
    ProductCategory {
        label: "11-Mechanical",
        code: "11",
        synonyms: &["mechanical", "mech"],
    },
    ProductCategory {
        label: "01-Automation",
        code: "01",
        synonyms: &["automation", "auto", "control system"],
    },
    ProductCategory {
        label: "00-IT",
        code: "00",
        synonyms: &["information technology", "software"],
    },
];

/// Detect the equipment family. Unresolved when no synonym occurs.
pub fn detect_product_type(text: &str) -> Attribute {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return Attribute::Unresolved;
    }

    for category in &PRODUCT_CATEGORIES {
        if let Some(synonym) = category
            .synonyms
            .iter()
            .find(|synonym| lowered.contains(*synonym))
        {
            debug!(synonym = %synonym, category = category.label, "Product type matched");
            return Attribute::resolved(category.label, category.code);
        }
    }

    Attribute::Unresolved
}
