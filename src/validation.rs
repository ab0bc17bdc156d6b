//! Validation module for supplier input collected by the shell.
//!
//! The classification engine accepts any string; these checks only decide
//! whether the CLI should run it at all.

/// Validates supplier text before classification
///
/// # Arguments
/// * `text` - The raw supplier text
/// * `max_length` - Maximum number of characters accepted
///
/// # Returns
/// * `Ok(&str)` - The trimmed supplier text if valid
/// * `Err(&str)` - Error type: "empty" or "too_long"
///
/// # Examples
/// ```
/// use transformer_code::validation::validate_supplier_text;
///
/// assert_eq!(validate_supplier_text("  ONAN 10kV ", 100), Ok("ONAN 10kV"));
/// assert_eq!(validate_supplier_text("   ", 100), Err("empty"));
/// assert_eq!(validate_supplier_text(&"a".repeat(101), 100), Err("too_long"));
/// ```
pub fn validate_supplier_text(text: &str, max_length: usize) -> Result<&str, &'static str> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err("empty");
    }

    if trimmed.chars().count() > max_length {
        return Err("too_long");
    }

    Ok(trimmed)
}

/// User-facing message for a validation error type
pub fn validation_message(error: &str) -> &'static str {
    match error {
        "empty" => "Please enter supplier input.",
        "too_long" => "Supplier input is too long.",
        _ => "Supplier input is invalid.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_supplier_text() {
        assert_eq!(validate_supplier_text("Transformer", 50), Ok("Transformer"));
        assert_eq!(validate_supplier_text("", 50), Err("empty"));
        assert_eq!(validate_supplier_text("\n\t", 50), Err("empty"));
    }

    #[test]
    fn test_length_counts_characters() {
        // "±" is two bytes but one character
        assert_eq!(validate_supplier_text("±±±", 3), Ok("±±±"));
        assert_eq!(validate_supplier_text("±±±±", 3), Err("too_long"));
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(validation_message("empty"), "Please enter supplier input.");
        assert_eq!(validation_message("too_long"), "Supplier input is too long.");
        assert_eq!(validation_message("other"), "Supplier input is invalid.");
    }
}
