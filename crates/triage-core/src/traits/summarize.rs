// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Summarization provider trait.

use async_trait::async_trait;

use crate::error::TriageError;

/// Condenses text into a summary bounded by length hints.
///
/// The short-term memory never requires this to succeed: on failure it
/// degrades to the raw input text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes `text` to roughly `min_length..=max_length` tokens.
    async fn summarize(
        &self,
        text: &str,
        max_length: u32,
        min_length: u32,
    ) -> Result<String, TriageError>;
}
