// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content handler trait -- the polymorphic capability behind dispatch.

use async_trait::async_trait;

use crate::error::TriageError;
use crate::types::{InputKind, ResultEnvelope, RoutingState};

/// Transforms one category of input into a normalized result envelope.
///
/// Handlers are stateless per call apart from lazily-built provider
/// clients. They own no persistent state relevant to the dispatcher and
/// never touch the memory subsystem directly.
#[async_trait]
pub trait ContentHandler: Send + Sync {
    /// The input category this handler serves.
    fn kind(&self) -> InputKind;

    /// Processes a routed input and produces a result envelope.
    ///
    /// The envelope must carry the handler's `kind` as its type tag and
    /// an RFC 3339 `timestamp` in its metadata.
    async fn process(&self, state: &RoutingState) -> Result<ResultEnvelope, TriageError>;
}
