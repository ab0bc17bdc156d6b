//! # Report Rendering
//!
//! Presentation of classification results: an attribute table followed by
//! the generated product code, or JSON for tooling.

use crate::attributes::Classification;
use crate::errors::AppResult;
use crate::input::BatchEntry;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute as CellAttribute, Cell, Color, ContentArrangement, Table};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format for classification results
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Build the `Type | Parameter | Code` table for one classification
pub fn attribute_table(classification: &Classification, highlight_unresolved: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Type", "Parameter", "Code"]);

    for (dimension, attribute) in classification.record.iter() {
        let mut parameter = Cell::new(attribute.label());
        if highlight_unresolved && !attribute.is_resolved() {
            parameter = parameter
                .fg(Color::Red)
                .add_attribute(CellAttribute::Bold);
        }
        table.add_row(vec![
            Cell::new(dimension.key()),
            parameter,
            Cell::new(attribute.code()),
        ]);
    }

    table
}

/// Write a single classification in the requested format
pub fn write_classification<W: Write>(
    writer: &mut W,
    classification: &Classification,
    format: OutputFormat,
    highlight_unresolved: bool,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, classification)?;
            writeln!(writer)?;
        }
        OutputFormat::Table => {
            writeln!(writer, "Extracted Parameters")?;
            writeln!(
                writer,
                "{}",
                attribute_table(classification, highlight_unresolved)
            )?;
            writeln!(writer)?;
            writeln!(writer, "Generated Product Code: {}", classification.product_code)?;
        }
    }
    Ok(())
}

/// Write a batch of classifications in the requested format
pub fn write_batch<W: Write>(
    writer: &mut W,
    entries: &[BatchEntry],
    format: OutputFormat,
    highlight_unresolved: bool,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, entries)?;
            writeln!(writer)?;
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Line", "Supplier Input", "Product Code", "Unresolved"]);

            for entry in entries {
                let unresolved = entry
                    .classification
                    .record
                    .unresolved()
                    .iter()
                    .map(|dimension| dimension.key())
                    .collect::<Vec<_>>()
                    .join(", ");
                let mut unresolved_cell = Cell::new(&unresolved);
                if highlight_unresolved && !unresolved.is_empty() {
                    unresolved_cell = unresolved_cell.fg(Color::Red);
                }
                table.add_row(vec![
                    Cell::new(entry.line_number),
                    Cell::new(&entry.text),
                    Cell::new(entry.classification.product_code.as_str()),
                    unresolved_cell,
                ]);
            }

            writeln!(writer, "{table}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::extract_attributes;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "table");
    }

    #[test]
    fn test_table_report_contains_code_and_rows() {
        let classification = extract_attributes("Dry Type Transformer 1000 kVA 20kV Cu IEC");
        let mut buffer = Vec::new();
        write_classification(&mut buffer, &classification, OutputFormat::Table, false).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Winding material"));
        assert!(output.contains("02-Transformer"));
        assert!(output.contains(&format!(
            "Generated Product Code: {}",
            classification.product_code
        )));
    }

    #[test]
    fn test_json_report_is_valid() {
        let classification = extract_attributes("");
        let mut buffer = Vec::new();
        write_classification(&mut buffer, &classification, OutputFormat::Json, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["product_code"], classification.product_code.as_str());
        assert_eq!(value["attributes"]["Standard"]["label"], "IEC");
        assert_eq!(value["attributes"]["Product type"]["code"], "");
        assert!(value["unresolved"]
            .as_array()
            .unwrap()
            .contains(&serde_json::Value::from("Product type")));
    }
}
