// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The dispatch pipeline: classify, handle, remember, respond.
//!
//! One request flows through a single sequential pipeline:
//! route -> handler -> short-term add-and-summarize -> long-term append.
//! All failures are captured at the `process_input` boundary and become
//! error response envelopes -- nothing propagates to the caller. Partial
//! memory writes before a failure point are not rolled back.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use triage_core::error::TriageError;
use triage_core::traits::{ContentHandler, ConversationLogger};
use triage_core::types::{
    InputEnvelope, InputKind, ResponseEnvelope, ResultEnvelope, RoutingState,
};
use triage_memory::{LongTermMemory, ShortTermMemory};
use triage_router::InputRouter;

use crate::logging::spawn_log_message;

/// Error message returned when no handler can serve the routed label.
const NO_HANDLER_MESSAGE: &str = "No agent could process the input";

/// Routes inputs to content handlers and maintains conversational memory.
///
/// Safe to call concurrently: per-request state is private, and the
/// shared short-term buffer and long-term store serialize their
/// mutations internally.
pub struct Dispatcher {
    router: InputRouter,
    handlers: HashMap<InputKind, Arc<dyn ContentHandler>>,
    short_term: Mutex<ShortTermMemory>,
    long_term: Arc<LongTermMemory>,
    logger: Option<Arc<dyn ConversationLogger>>,
}

impl Dispatcher {
    /// Creates a dispatcher over a fixed handler registry.
    ///
    /// The registry is keyed by each handler's `kind()`; labels without a
    /// registered handler are rejected at dispatch time with an explicit
    /// error rather than a lookup panic.
    pub fn new(
        router: InputRouter,
        handlers: Vec<Arc<dyn ContentHandler>>,
        short_term: ShortTermMemory,
        long_term: Arc<LongTermMemory>,
        logger: Option<Arc<dyn ConversationLogger>>,
    ) -> Self {
        let handlers: HashMap<InputKind, Arc<dyn ContentHandler>> =
            handlers.into_iter().map(|h| (h.kind(), h)).collect();
        info!(
            handlers = handlers.len(),
            logging = logger.is_some(),
            "dispatcher initialized"
        );
        Self {
            router,
            handlers,
            short_term: Mutex::new(short_term),
            long_term,
            logger,
        }
    }

    /// Processes one input envelope end-to-end.
    ///
    /// Never fails: every error from classification, dispatch, or the
    /// memory pipeline is converted into an error response envelope.
    pub async fn process_input(&self, envelope: InputEnvelope) -> ResponseEnvelope {
        let conversation_id = envelope.conversation_id_or_default().to_string();
        self.log_turn(&conversation_id, "user", envelope.content.clone());

        match self.run(&envelope).await {
            Ok(result) => {
                self.log_turn(&conversation_id, "agent", result.output.to_text());
                ResponseEnvelope::success(result)
            }
            Err(TriageError::NoHandler { label }) => {
                warn!(label = %label, "no handler registered for routed label");
                ResponseEnvelope::error(NO_HANDLER_MESSAGE)
            }
            Err(e) => {
                warn!(error = %e, "dispatch failed");
                ResponseEnvelope::error(e.to_string())
            }
        }
    }

    /// The fallible pipeline behind `process_input`.
    async fn run(&self, envelope: &InputEnvelope) -> Result<ResultEnvelope, TriageError> {
        let state = RoutingState::from_envelope(envelope);

        let decision = self.router.route(&state.input).await;
        if decision.fallback {
            info!(
                label = %decision.label,
                reason = %decision.reason,
                "routing to default label"
            );
        } else {
            info!(label = %decision.label, "routing input");
        }

        let handler = self
            .handlers
            .get(&decision.label)
            .ok_or_else(|| TriageError::NoHandler {
                label: decision.label.to_string(),
            })?;

        let result = handler.process(&state).await?;

        // Merge the exchange into the memory pipeline: the combined
        // original-input + handler-output text rolls through the
        // short-term buffer, and its summary lands in the long-term log.
        let combined = format!("{} {}", envelope.content, result.output.to_text());
        let summary = {
            let mut short_term = self.short_term.lock().await;
            short_term.add_and_summarize(combined).await
        };
        self.long_term.add(summary).await?;
        debug!("memory pipeline updated");

        Ok(result)
    }

    /// Returns a snapshot of the short-term buffer in insertion order.
    pub async fn short_term_context(&self) -> Vec<String> {
        self.short_term.lock().await.get_context()
    }

    /// The shared long-term store.
    pub fn long_term(&self) -> Arc<LongTermMemory> {
        self.long_term.clone()
    }

    fn log_turn(&self, conversation_id: &str, role: &'static str, content: String) {
        if let Some(logger) = &self.logger {
            spawn_log_message(
                logger.clone(),
                conversation_id.to_string(),
                role,
                content,
            );
        }
    }
}
