//! # Supplier Input Collection
//!
//! Reads supplier text from files or streams and splits batch input into
//! independent classification requests, one per non-blank line.

use crate::aggregator::extract_attributes;
use crate::attributes::Classification;
use crate::errors::{error_logging, AppError, AppResult};
use crate::observability::metrics::{record_batch_metrics, record_error_metrics};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// One classified line of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// 1-based line number in the original input
    pub line_number: usize,
    /// Trimmed supplier text of that line
    pub text: String,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Read supplier text from a file
pub fn read_text_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        let path_display = path.display().to_string();
        error_logging::log_io_error(&e, "read_text_file", Some(&path_display));
        record_error_metrics("io", "input");
        AppError::Io(format!("Failed to read '{}': {}", path_display, e))
    })
}

/// Read supplier text from any reader (stdin in the CLI)
pub fn read_text<R: Read>(mut reader: R) -> AppResult<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| {
        error_logging::log_io_error(&e, "read_text", None);
        record_error_metrics("io", "input");
        AppError::Io(format!("Failed to read input: {}", e))
    })?;
    Ok(text)
}

/// Non-blank, trimmed lines paired with their 1-based line numbers
pub fn split_batch(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}

/// Classify every non-blank line independently
pub fn classify_batch(text: &str) -> Vec<BatchEntry> {
    let start_time = Instant::now();
    let lines = split_batch(text);
    debug!("Classifying batch of {} lines", lines.len());

    let entries: Vec<BatchEntry> = lines
        .into_iter()
        .map(|(line_number, line)| BatchEntry {
            line_number,
            text: line.to_string(),
            classification: extract_attributes(line),
        })
        .collect();

    record_batch_metrics(entries.len(), start_time.elapsed());
    info!(lines = entries.len(), "Batch classification finished");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_batch_skips_blank_lines() {
        let lines = split_batch("first\n\n   \n  second  \r\nthird");
        assert_eq!(lines, vec![(1, "first"), (4, "second"), (5, "third")]);
    }

    #[test]
    fn test_split_batch_empty() {
        assert!(split_batch("").is_empty());
        assert!(split_batch("\n\n").is_empty());
    }

    #[test]
    fn test_read_text_from_reader() {
        let text = read_text("ONAN 10kV".as_bytes()).unwrap();
        assert_eq!(text, "ONAN 10kV");
    }
}
