// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dispatch pipeline for the triage dispatcher.
//!
//! The [`Dispatcher`] is the root coordinator that:
//! - Classifies each input into a content label
//! - Invokes the matching content handler
//! - Rolls the exchange through short-term memory and appends the
//!   summary to the long-term store
//! - Fires best-effort conversation log writes
//! - Returns a normalized response envelope, never an error
//!
//! Transport layers call [`Dispatcher::process_input`] concurrently; all
//! shared state serializes internally.

pub mod dispatcher;
pub mod logging;

pub use dispatcher::Dispatcher;
pub use logging::spawn_log_message;
