// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability provider traits consumed by the dispatch pipeline.
//!
//! Each trait is an external-collaborator boundary: the core orchestrates
//! calls through these contracts and never depends on a concrete provider.

pub mod caption;
pub mod classify;
pub mod generate;
pub mod handler;
pub mod logger;
pub mod sink;
pub mod summarize;

pub use caption::Captioner;
pub use classify::ZeroShotClassifier;
pub use generate::TextGenerator;
pub use handler::ContentHandler;
pub use logger::ConversationLogger;
pub use sink::SummarySink;
pub use summarize::Summarizer;
