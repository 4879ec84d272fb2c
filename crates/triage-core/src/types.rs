// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types crossing component boundaries: input/result/response
//! envelopes, the routing state, and the input label enum.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Sentinel conversation id used when an input envelope carries none.
pub const DEFAULT_CONVERSATION_ID: &str = "default";

/// The fixed set of input content categories the dispatcher routes between.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Image,
    File,
    Link,
}

impl InputKind {
    /// The full candidate label set, in stable order.
    pub fn all() -> [InputKind; 4] {
        [
            InputKind::Text,
            InputKind::Image,
            InputKind::File,
            InputKind::Link,
        ]
    }
}

/// An incoming request as received from a transport layer.
///
/// Immutable once received; the dispatcher never writes back into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputEnvelope {
    /// Raw user input: free text, an image URL, a file path, or a web link.
    pub content: String,

    /// Optional routing hints (e.g. `file_type` for file inputs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// Conversation this input belongs to. Defaults to a fixed sentinel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl InputEnvelope {
    /// Creates an envelope with content only.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: None,
            conversation_id: None,
        }
    }

    /// Attaches a single metadata entry (builder style).
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Attaches a conversation id (builder style).
    pub fn with_conversation_id(mut self, id: impl Into<String>) -> Self {
        self.conversation_id = Some(id.into());
        self
    }

    /// The conversation id, or the sentinel when absent.
    pub fn conversation_id_or_default(&self) -> &str {
        self.conversation_id
            .as_deref()
            .unwrap_or(DEFAULT_CONVERSATION_ID)
    }
}

/// Transient per-request routing state.
///
/// Built once per dispatch from the input envelope; lives only for the
/// duration of that dispatch and is never persisted.
#[derive(Debug, Clone)]
pub struct RoutingState {
    /// The input being routed.
    pub input: String,
    /// Extra routing fields merged in from envelope metadata.
    pub extra: HashMap<String, String>,
}

impl RoutingState {
    /// Builds routing state from an envelope, merging metadata into `extra`.
    pub fn from_envelope(envelope: &InputEnvelope) -> Self {
        Self {
            input: envelope.content.clone(),
            extra: envelope.metadata.clone().unwrap_or_default(),
        }
    }

    /// Returns the extra field for `key`, or the empty string when absent.
    pub fn extra_or_empty(&self, key: &str) -> &str {
        self.extra.get(key).map(String::as_str).unwrap_or("")
    }
}

/// Handler output: plain prose or a structured JSON value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HandlerOutput {
    /// Plain text output (generated prose, a caption, extracted text).
    Text(String),
    /// Structured output (tabular data, title/content pairs).
    Structured(serde_json::Value),
}

impl HandlerOutput {
    /// Stringifies the output for memory merging and logging.
    pub fn to_text(&self) -> String {
        match self {
            HandlerOutput::Text(text) => text.clone(),
            HandlerOutput::Structured(value) => value.to_string(),
        }
    }
}

/// The normalized result produced by exactly one handler per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// The content category that produced this result.
    #[serde(rename = "type")]
    pub kind: InputKind,
    /// The original input, echoed back.
    pub input: String,
    /// The handler's output.
    pub output: HandlerOutput,
    /// Result metadata. Handlers always stamp an RFC 3339 `timestamp`.
    pub metadata: HashMap<String, String>,
}

/// The response returned from `process_input`, tagged by status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResponseEnvelope {
    /// A handler produced a result.
    Success {
        result: ResultEnvelope,
        source: String,
    },
    /// The request failed; `message` describes why.
    Error { message: String, source: String },
}

impl ResponseEnvelope {
    /// Wraps a handler result in a success response.
    pub fn success(result: ResultEnvelope) -> Self {
        Self::Success {
            result,
            source: "agent".to_string(),
        }
    }

    /// Builds an error response with a descriptive message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            source: "agent".to_string(),
        }
    }

    /// Whether this response carries a result.
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseEnvelope::Success { .. })
    }
}

/// A persisted condensation of recent conversational turns.
///
/// One record is produced per successful dispatch and appended to the
/// long-term store as a single newline-delimited JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// The summary text.
    pub message: String,
}
