// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input label classification and routing for the triage dispatcher.
//!
//! This crate provides:
//! - [`KeywordClassifier`]: Heuristic label classification (zero-cost, zero-latency)
//! - [`ClassifierProvider`]: The strategy variant chosen once at construction
//!   (remote zero-shot, local heuristic, or unavailable)
//! - [`InputRouter`]: Routing decisions with the default-label fallback
//!
//! The router runs before dispatch, deciding which content handler an
//! input belongs to. It never fails: when no classification strategy is
//! available the decision falls back to the `text` label.

pub mod classifier;
pub mod router;

pub use classifier::{ClassificationResult, KeywordClassifier};
pub use router::{ClassifierProvider, InputRouter, RoutingDecision, DEFAULT_LABEL};
