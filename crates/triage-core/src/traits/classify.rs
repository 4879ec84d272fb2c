// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Zero-shot classification provider trait.

use async_trait::async_trait;

use crate::error::TriageError;
use crate::types::InputKind;

/// Maps free text to one label from a non-empty candidate set.
///
/// The returned label is always a member of `labels`. Providers signal
/// unavailability via [`TriageError::Config`] rather than guessing --
/// the routing layer applies its own default-label fallback.
#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    /// Classifies `text` against the candidate `labels`, returning the
    /// single top-ranked label.
    async fn classify(&self, text: &str, labels: &[InputKind]) -> Result<InputKind, TriageError>;
}
