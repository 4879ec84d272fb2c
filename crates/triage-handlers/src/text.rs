// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text handler: forwards free text to a generation provider.

use std::sync::Arc;

use async_trait::async_trait;
use triage_core::error::TriageError;
use triage_core::traits::{ContentHandler, TextGenerator};
use triage_core::types::{HandlerOutput, InputKind, ResultEnvelope, RoutingState};

use crate::stamped_metadata;

/// Prompt wrapper applied to every text input before generation.
const PROMPT_PREFIX: &str = "You are a helpful text assistant. Respond to the following: ";

/// Handles free-text inputs by generating a prose response.
pub struct TextHandler {
    generator: Arc<dyn TextGenerator>,
}

impl TextHandler {
    /// Creates a text handler over a generation provider.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl ContentHandler for TextHandler {
    fn kind(&self) -> InputKind {
        InputKind::Text
    }

    async fn process(&self, state: &RoutingState) -> Result<ResultEnvelope, TriageError> {
        let prompt = format!("{PROMPT_PREFIX}{}", state.input);
        let response = self.generator.generate(&prompt).await?;

        Ok(ResultEnvelope {
            kind: InputKind::Text,
            input: state.input.clone(),
            output: HandlerOutput::Text(response),
            metadata: stamped_metadata(),
        })
    }
}
