// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image captioning provider trait.

use async_trait::async_trait;

use crate::error::TriageError;

/// Produces a caption for an image reference (URL).
#[async_trait]
pub trait Captioner: Send + Sync {
    /// Generates a caption for the image at `image_ref`.
    async fn caption(&self, image_ref: &str) -> Result<String, TriageError>;
}
