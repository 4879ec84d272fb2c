// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fire-and-forget conversation logging.
//!
//! Conversation log writes are strictly best-effort: they run on a
//! spawned task and failures are logged and discarded. This helper makes
//! the non-propagation contract visible at the call site.

use std::sync::Arc;

use tracing::warn;
use triage_core::traits::ConversationLogger;

/// Spawns a conversation-log write that never reports back.
///
/// Errors are recorded at `warn` level and swallowed; the caller
/// continues regardless of the outcome.
pub fn spawn_log_message(
    logger: Arc<dyn ConversationLogger>,
    conversation_id: String,
    role: &'static str,
    content: String,
) {
    tokio::spawn(async move {
        if let Err(e) = logger
            .log_message(&conversation_id, role, &content)
            .await
        {
            warn!(
                error = %e,
                conversation_id = %conversation_id,
                role,
                "conversation log write failed (discarded)"
            );
        }
    });
}
