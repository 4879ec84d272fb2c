// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image handler: captions an image referenced by URL.

use std::sync::Arc;

use async_trait::async_trait;
use triage_core::error::TriageError;
use triage_core::traits::{Captioner, ContentHandler};
use triage_core::types::{HandlerOutput, InputKind, ResultEnvelope, RoutingState};

use crate::stamped_metadata;

/// Handles image inputs by generating a caption for the referenced image.
pub struct ImageHandler {
    captioner: Arc<dyn Captioner>,
}

impl ImageHandler {
    /// Creates an image handler over a captioning provider.
    pub fn new(captioner: Arc<dyn Captioner>) -> Self {
        Self { captioner }
    }
}

#[async_trait]
impl ContentHandler for ImageHandler {
    fn kind(&self) -> InputKind {
        InputKind::Image
    }

    async fn process(&self, state: &RoutingState) -> Result<ResultEnvelope, TriageError> {
        let caption = self.captioner.caption(&state.input).await?;

        let mut metadata = stamped_metadata();
        metadata.insert("source".to_string(), state.input.clone());

        Ok(ResultEnvelope {
            kind: InputKind::Image,
            input: state.input.clone(),
            output: HandlerOutput::Text(caption),
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCaptioner;

    #[async_trait]
    impl Captioner for FixedCaptioner {
        async fn caption(&self, _image_ref: &str) -> Result<String, TriageError> {
            Ok("a cat sleeping on a windowsill".into())
        }
    }

    #[tokio::test]
    async fn captions_image_reference() {
        let handler = ImageHandler::new(Arc::new(FixedCaptioner));
        let state = RoutingState {
            input: "https://example.com/cat.jpg".into(),
            extra: Default::default(),
        };

        let result = handler.process(&state).await.unwrap();
        assert_eq!(result.kind, InputKind::Image);
        assert_eq!(result.output.to_text(), "a cat sleeping on a windowsill");
        assert_eq!(
            result.metadata.get("source").map(String::as_str),
            Some("https://example.com/cat.jpg")
        );
        assert!(result.metadata.contains_key("timestamp"));
    }
}
