// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the triage dispatch pipeline.

use thiserror::Error;

/// The primary error type used across all triage crates and core operations.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Configuration errors (missing endpoint/credential, invalid config value).
    ///
    /// Signals that a provider is unusable as configured; callers apply
    /// their own fallback or default.
    #[error("configuration error: {0}")]
    Config(String),

    /// Remote call failed (connection refused, timeout, non-success status).
    ///
    /// Treated as "provider unavailable for this call only".
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File or document extraction failed (unreadable PDF, malformed CSV).
    #[error("extraction error: {message}")]
    Extraction {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The input cannot be handled, e.g. an unknown file type.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    /// Classification produced a label with no registered handler.
    #[error("no handler registered for label `{label}`")]
    NoHandler { label: String },

    /// Long-term store persistence errors.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
