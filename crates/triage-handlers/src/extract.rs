// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Blocking extraction helpers for the file handler.
//!
//! These run on the blocking thread pool (the file handler wraps them in
//! `spawn_blocking`); failures surface as typed extraction errors.

use serde_json::{json, Value};
use triage_core::error::TriageError;

/// Extracts the text content of a PDF document.
pub fn pdf_text(path: &str) -> Result<String, TriageError> {
    pdf_extract::extract_text(path).map_err(|e| TriageError::Extraction {
        message: format!("failed to extract text from {path}: {e}"),
        source: None,
    })
}

/// Extracts a CSV file into `{headers, rows}` tabular JSON.
///
/// `headers` is the first record; `rows` holds every subsequent record
/// as an array of strings.
pub fn csv_table(path: &str) -> Result<Value, TriageError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| TriageError::Extraction {
        message: format!("failed to open {path}: {e}"),
        source: Some(Box::new(e)),
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| TriageError::Extraction {
            message: format!("failed to read CSV headers from {path}: {e}"),
            source: Some(Box::new(e)),
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TriageError::Extraction {
            message: format!("failed to read CSV record from {path}: {e}"),
            source: Some(Box::new(e)),
        })?;
        rows.push(Value::Array(
            record
                .iter()
                .map(|field| Value::String(field.to_string()))
                .collect(),
        ));
    }

    Ok(json!({
        "headers": headers,
        "rows": rows,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn csv_table_extracts_headers_and_rows() {
        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "name,age").unwrap();
        writeln!(file, "alice,30").unwrap();
        writeln!(file, "bob,25").unwrap();
        file.flush().unwrap();

        let table = csv_table(file.path().to_str().unwrap()).unwrap();
        assert_eq!(table["headers"], json!(["name", "age"]));
        assert_eq!(table["rows"].as_array().unwrap().len(), 2);
        assert_eq!(table["rows"][0], json!(["alice", "30"]));
        assert_eq!(table["rows"][1], json!(["bob", "25"]));
    }

    #[test]
    fn csv_table_header_only_has_no_rows() {
        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "col_a,col_b").unwrap();
        file.flush().unwrap();

        let table = csv_table(file.path().to_str().unwrap()).unwrap();
        assert_eq!(table["headers"], json!(["col_a", "col_b"]));
        assert!(table["rows"].as_array().unwrap().is_empty());
    }

    #[test]
    fn csv_table_missing_file_is_extraction_error() {
        let err = csv_table("/nonexistent/input.csv").unwrap_err();
        assert!(matches!(err, TriageError::Extraction { .. }));
    }

    #[test]
    fn pdf_text_missing_file_is_extraction_error() {
        let err = pdf_text("/nonexistent/input.pdf").unwrap_err();
        assert!(matches!(err, TriageError::Extraction { .. }));
    }
}
