// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-tier conversational memory for the triage dispatcher.
//!
//! - [`ShortTermMemory`]: bounded rolling buffer of recent exchanges with
//!   summarize-on-add and graceful degradation
//! - [`LongTermMemory`]: ordered, append-only store of summary records,
//!   file-backed (newline-delimited JSON) or remote
//!
//! The dispatcher feeds every successful exchange through the short-term
//! buffer and appends the resulting summary to the long-term store.

pub mod long_term;
pub mod short_term;

pub use long_term::LongTermMemory;
pub use short_term::{ShortTermMemory, DEFAULT_CAPACITY};
