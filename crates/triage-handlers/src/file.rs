// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File handler: extracts text or tabular data from local documents.

use async_trait::async_trait;
use triage_core::error::TriageError;
use triage_core::traits::ContentHandler;
use triage_core::types::{HandlerOutput, InputKind, ResultEnvelope, RoutingState};

use crate::extract;
use crate::stamped_metadata;

/// Handles file inputs, discriminated by the `file_type` routing field.
///
/// Supports `pdf` (extracted text) and `csv` (tabular JSON). Any other
/// `file_type` value -- including an absent one -- is rejected.
#[derive(Debug, Default)]
pub struct FileHandler;

impl FileHandler {
    /// Creates a file handler.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentHandler for FileHandler {
    fn kind(&self) -> InputKind {
        InputKind::File
    }

    async fn process(&self, state: &RoutingState) -> Result<ResultEnvelope, TriageError> {
        let file_type = state.extra_or_empty("file_type").to_string();
        let path = state.input.clone();

        // Extraction is synchronous; run it off the async runtime.
        let output = match file_type.as_str() {
            "pdf" => {
                let text = tokio::task::spawn_blocking(move || extract::pdf_text(&path))
                    .await
                    .map_err(|e| TriageError::Internal(format!("extraction task failed: {e}")))??;
                HandlerOutput::Text(text)
            }
            "csv" => {
                let table = tokio::task::spawn_blocking(move || extract::csv_table(&path))
                    .await
                    .map_err(|e| TriageError::Internal(format!("extraction task failed: {e}")))??;
                HandlerOutput::Structured(table)
            }
            other => {
                return Err(TriageError::UnsupportedInput(format!(
                    "unsupported file type: {other}"
                )))
            }
        };

        let mut metadata = stamped_metadata();
        metadata.insert("file_type".to_string(), file_type);

        Ok(ResultEnvelope {
            kind: InputKind::File,
            input: state.input.clone(),
            output,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn state_for(path: &str, file_type: &str) -> RoutingState {
        let mut extra = HashMap::new();
        if !file_type.is_empty() {
            extra.insert("file_type".to_string(), file_type.to_string());
        }
        RoutingState {
            input: path.to_string(),
            extra,
        }
    }

    #[tokio::test]
    async fn csv_with_two_rows_yields_two_rows() {
        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "city,country").unwrap();
        writeln!(file, "Lisbon,Portugal").unwrap();
        writeln!(file, "Kyoto,Japan").unwrap();
        file.flush().unwrap();

        let handler = FileHandler::new();
        let state = state_for(file.path().to_str().unwrap(), "csv");
        let result = handler.process(&state).await.unwrap();

        assert_eq!(result.kind, InputKind::File);
        assert_eq!(
            result.metadata.get("file_type").map(String::as_str),
            Some("csv")
        );
        match &result.output {
            HandlerOutput::Structured(table) => {
                assert_eq!(table["rows"].as_array().unwrap().len(), 2);
            }
            other => panic!("expected structured output, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_file_type_is_rejected() {
        let handler = FileHandler::new();
        let state = state_for("document.xyz", "xyz");
        let err = handler.process(&state).await.unwrap_err();
        match err {
            TriageError::UnsupportedInput(msg) => {
                assert_eq!(msg, "unsupported file type: xyz");
            }
            other => panic!("expected UnsupportedInput, got {other}"),
        }
    }

    #[tokio::test]
    async fn missing_file_type_is_rejected() {
        let handler = FileHandler::new();
        let state = state_for("document.pdf", "");
        let err = handler.process(&state).await.unwrap_err();
        assert!(matches!(err, TriageError::UnsupportedInput(_)));
    }

    #[tokio::test]
    async fn missing_csv_file_is_extraction_error() {
        let handler = FileHandler::new();
        let state = state_for("/nonexistent/data.csv", "csv");
        let err = handler.process(&state).await.unwrap_err();
        assert!(matches!(err, TriageError::Extraction { .. }));
    }
}
