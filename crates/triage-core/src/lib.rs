// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the triage dispatcher.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common envelope types used throughout the triage workspace. All capability
//! providers (classification, summarization, captioning, generation, logging,
//! persistence) implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TriageError;
pub use types::{
    HandlerOutput, InputEnvelope, InputKind, ResponseEnvelope, ResultEnvelope, RoutingState,
    SummaryRecord, DEFAULT_CONVERSATION_ID,
};

// Re-export all provider traits at crate root.
pub use traits::{
    Captioner, ContentHandler, ConversationLogger, SummarySink, Summarizer, TextGenerator,
    ZeroShotClassifier,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triage_error_has_all_variants() {
        // Verify all 7 error variants exist and can be constructed.
        let _config = TriageError::Config("test".into());
        let _transport = TriageError::Transport {
            message: "test".into(),
            source: None,
        };
        let _extraction = TriageError::Extraction {
            message: "test".into(),
            source: None,
        };
        let _unsupported = TriageError::UnsupportedInput("test".into());
        let _no_handler = TriageError::NoHandler {
            label: "text".into(),
        };
        let _storage = TriageError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _internal = TriageError::Internal("test".into());
    }

    #[test]
    fn input_kind_has_four_labels() {
        let labels = InputKind::all();
        assert_eq!(labels.len(), 4, "InputKind must have exactly 4 labels");
        assert_eq!(labels[0], InputKind::Text, "text is the default label");
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // Verifies that every provider trait compiles and is accessible
        // through the public API.
        fn _assert_handler<T: ContentHandler>() {}
        fn _assert_classifier<T: ZeroShotClassifier>() {}
        fn _assert_summarizer<T: Summarizer>() {}
        fn _assert_captioner<T: Captioner>() {}
        fn _assert_generator<T: TextGenerator>() {}
        fn _assert_logger<T: ConversationLogger>() {}
        fn _assert_sink<T: SummarySink>() {}
    }
}
