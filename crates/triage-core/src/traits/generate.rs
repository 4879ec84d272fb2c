// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text generation provider trait.

use async_trait::async_trait;

use crate::error::TriageError;

/// Generates prose in response to a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a text completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, TriageError>;
}
