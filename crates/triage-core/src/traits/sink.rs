// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote summary persistence trait for the long-term store.

use async_trait::async_trait;

use crate::error::TriageError;
use crate::types::SummaryRecord;

/// Persists summary records in a remote store.
///
/// Used by the long-term memory's remote mode in place of the local
/// append-only file.
#[async_trait]
pub trait SummarySink: Send + Sync {
    /// Durably persists one summary record.
    async fn persist(&self, record: &SummaryRecord) -> Result<(), TriageError>;
}
