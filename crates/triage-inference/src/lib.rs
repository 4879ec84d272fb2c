// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hosted inference service client for the triage dispatcher.
//!
//! One HTTP client covers every remote capability the pipeline consumes:
//! zero-shot classification, summarization, image captioning, text
//! generation, conversation logging, and summary persistence. Each
//! capability is exposed through the corresponding `triage-core` trait, so
//! the rest of the workspace never sees the wire format.

pub mod client;
pub mod types;

pub use client::InferenceClient;
