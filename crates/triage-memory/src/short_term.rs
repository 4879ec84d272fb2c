// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Short-term conversational memory: a bounded rolling buffer with
//! summarize-on-add.
//!
//! The buffer holds the last N exchange strings (FIFO eviction). Every
//! add produces a summary of the buffer's joined contents through an
//! optional summarization provider; when the provider is absent or
//! errors, the summary degrades to the raw joined text. Summarization is
//! never required to succeed.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::warn;
use triage_core::traits::Summarizer;

/// Default capacity of the rolling buffer.
pub const DEFAULT_CAPACITY: usize = 5;

/// Bounded rolling buffer of recent exchanges.
///
/// Mutated only through [`add_and_summarize`](Self::add_and_summarize);
/// the dispatcher serializes concurrent access behind a mutex.
pub struct ShortTermMemory {
    buffer: VecDeque<String>,
    capacity: usize,
    summarizer: Option<Arc<dyn Summarizer>>,
    summary_max_length: u32,
    summary_min_length: u32,
}

impl ShortTermMemory {
    /// Creates a buffer with the given capacity and no summarizer.
    ///
    /// A capacity of zero is clamped to one -- the buffer invariant
    /// (`len <= capacity`) requires room for at least one entry.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            summarizer: None,
            summary_max_length: 130,
            summary_min_length: 30,
        }
    }

    /// Attaches a summarization provider with length hints (builder style).
    pub fn with_summarizer(
        mut self,
        summarizer: Arc<dyn Summarizer>,
        max_length: u32,
        min_length: u32,
    ) -> Self {
        self.summarizer = Some(summarizer);
        self.summary_max_length = max_length;
        self.summary_min_length = min_length;
        self
    }

    /// Appends a message (evicting the oldest entry at capacity), then
    /// summarizes the buffer's current joined contents.
    ///
    /// Degrades gracefully: if the summarization provider is absent or
    /// fails, the raw joined buffer text is returned instead. No failure
    /// propagates from this method.
    pub async fn add_and_summarize(&mut self, message: impl Into<String>) -> String {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(message.into());

        let joined = self.joined();
        match &self.summarizer {
            Some(summarizer) => {
                match summarizer
                    .summarize(&joined, self.summary_max_length, self.summary_min_length)
                    .await
                {
                    Ok(summary) => summary,
                    Err(e) => {
                        warn!(error = %e, "summarization failed, using raw buffer text");
                        joined
                    }
                }
            }
            None => joined,
        }
    }

    /// Returns a snapshot of the buffer in insertion order.
    pub fn get_context(&self) -> Vec<String> {
        self.buffer.iter().cloned().collect()
    }

    /// Current number of buffered messages.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The fixed capacity set at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn joined(&self) -> String {
        self.buffer
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
