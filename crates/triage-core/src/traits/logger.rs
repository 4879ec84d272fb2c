// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation logging provider trait.

use async_trait::async_trait;

use crate::error::TriageError;

/// Records conversation turns in an external store.
///
/// Strictly best-effort: the dispatcher wraps every call in a
/// fire-and-forget task and discards failures.
#[async_trait]
pub trait ConversationLogger: Send + Sync {
    /// Logs one message for `conversation_id` with the given role
    /// (`"user"` or `"agent"`).
    async fn log_message(
        &self,
        conversation_id: &str,
        role: &str,
        content: &str,
    ) -> Result<(), TriageError>;
}
