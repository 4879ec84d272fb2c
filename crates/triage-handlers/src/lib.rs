// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content handlers for the triage dispatcher.
//!
//! One handler per input category, all implementing the
//! [`ContentHandler`](triage_core::ContentHandler) contract:
//!
//! - [`TextHandler`]: prompt-templated text generation
//! - [`ImageHandler`]: image URL captioning
//! - [`FileHandler`]: PDF/CSV extraction with a `file_type` discriminator
//! - [`LinkHandler`]: URL fetch + HTML title/content extraction
//!
//! Handlers own no persistent state; the text and image handlers consume
//! their capability providers through core traits.

pub mod extract;
pub mod file;
pub mod image;
pub mod link;
pub mod text;

pub use file::FileHandler;
pub use image::ImageHandler;
pub use link::LinkHandler;
pub use text::TextHandler;

use std::collections::HashMap;

/// Builds result metadata with the mandatory RFC 3339 timestamp.
pub(crate) fn stamped_metadata() -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    metadata.insert("timestamp".to_string(), chrono::Utc::now().to_rfc3339());
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamped_metadata_contains_timestamp() {
        let metadata = stamped_metadata();
        let timestamp = metadata.get("timestamp").expect("timestamp present");
        // RFC 3339 timestamps parse back.
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
