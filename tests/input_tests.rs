#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};
    use transformer_code::attributes::Dimension;
    use transformer_code::errors::AppError;
    use transformer_code::input::{classify_batch, read_text_file};
    use transformer_code::report::{write_batch, OutputFormat};

    #[test]
    fn test_read_text_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Oil Transformer 2300kVA 10kV/0.4kV ONAN").unwrap();

        let text = read_text_file(file.path()).unwrap();
        assert!(text.starts_with("Oil Transformer"));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        match read_text_file(&missing) {
            Err(AppError::Io(message)) => assert!(message.contains("missing.txt")),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_lines_are_independent() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "Dry Type Transformer 1000 kVA 20kV Cu\n\n   \nMV Switchgear 36kV indoor\nSCADA software\n"
        )
        .unwrap();

        let text = read_text_file(file.path()).unwrap();
        let entries = classify_batch(&text);

        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries.iter().map(|e| e.line_number).collect::<Vec<_>>(),
            vec![1, 4, 5]
        );

        let first = &entries[0].classification.record;
        assert_eq!(first.get(Dimension::OilDry).label(), "Dry Type");
        assert_eq!(first.get(Dimension::WindingMaterial).label(), "Cu");

        let second = &entries[1].classification.record;
        assert_eq!(second.get(Dimension::ProductType).label(), "03-MV Switchgear");
        assert_eq!(second.get(Dimension::Classification).label(), "Indoor");
        // Copper from the first line must not leak into the second
        assert!(!second.get(Dimension::WindingMaterial).is_resolved());

        let third = &entries[2].classification.record;
        assert_eq!(third.get(Dimension::SystemCategory).code(), "S");
    }

    #[test]
    fn test_batch_json_output() {
        let entries = classify_batch("ONAN 40 MVA\nKNAN 5 MVA");
        let mut buffer = Vec::new();
        write_batch(&mut buffer, &entries, OutputFormat::Json, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["line_number"], 1);
        assert_eq!(rows[0]["attributes"]["Oil/Dry"]["label"], "Mineral Oil");
        assert_eq!(rows[1]["attributes"]["Oil/Dry"]["label"], "Ester Oil");
        assert_eq!(rows[1]["text"], "KNAN 5 MVA");
    }

    #[test]
    fn test_batch_table_output() {
        let entries = classify_batch("Transformer 40 MVA");
        let mut buffer = Vec::new();
        write_batch(&mut buffer, &entries, OutputFormat::Table, false).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Product Code"));
        assert!(output.contains(entries[0].classification.product_code.as_str()));
    }

    #[test]
    fn test_empty_batch() {
        assert!(classify_batch("\n \n").is_empty());
    }
}
