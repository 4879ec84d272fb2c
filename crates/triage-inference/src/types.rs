// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inference service request/response types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /classify`.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyRequest {
    /// Text to classify.
    pub text: String,
    /// Candidate labels, in priority order.
    pub labels: Vec<String>,
}

/// Response body from `POST /classify`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyResponse {
    /// The top-ranked label.
    pub label: String,
}

/// Request body for `POST /summarize`.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest {
    /// Text to condense.
    pub text: String,
    /// Upper length hint.
    pub max_length: u32,
    /// Lower length hint.
    pub min_length: u32,
}

/// Response body from `POST /summarize`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeResponse {
    /// The condensed text.
    pub summary: String,
}

/// Request body for `POST /caption`.
#[derive(Debug, Clone, Serialize)]
pub struct CaptionRequest {
    /// URL of the image to caption.
    pub image_url: String,
}

/// Response body from `POST /caption`.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionResponse {
    /// The generated caption.
    pub caption: String,
}

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Prompt to complete.
    pub prompt: String,
}

/// Response body from `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The generated prose.
    pub text: String,
}

/// Request body for `POST /log`.
#[derive(Debug, Clone, Serialize)]
pub struct LogMessageRequest {
    /// Conversation this message belongs to.
    pub conversation_id: String,
    /// Message role: `"user"` or `"agent"`.
    pub role: String,
    /// The message content.
    pub content: String,
    /// RFC 3339 timestamp of the log write.
    pub timestamp: String,
}

/// Acknowledgement body returned by side-effect endpoints.
///
/// The body is ignored beyond a successful status; this type exists so
/// responses still deserialize strictly.
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    /// Whether the write was accepted.
    #[serde(default)]
    pub ok: bool,
}

/// Error body returned by the inference service on failure statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_request_serializes_labels_in_order() {
        let req = ClassifyRequest {
            text: "what is rust?".into(),
            labels: vec!["text".into(), "image".into(), "file".into(), "link".into()],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["text"], "what is rust?");
        assert_eq!(json["labels"][0], "text");
        assert_eq!(json["labels"][3], "link");
    }

    #[test]
    fn summarize_request_carries_length_bounds() {
        let req = SummarizeRequest {
            text: "long text".into(),
            max_length: 130,
            min_length: 30,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["max_length"], 130);
        assert_eq!(json["min_length"], 30);
    }

    #[test]
    fn ack_response_tolerates_empty_body() {
        let ack: AckResponse = serde_json::from_str("{}").unwrap();
        assert!(!ack.ok);
        let ack: AckResponse = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(ack.ok);
    }

    #[test]
    fn error_response_deserializes() {
        let err: ApiErrorResponse =
            serde_json::from_str(r#"{"message": "model overloaded"}"#).unwrap();
        assert_eq!(err.message, "model overloaded");
    }
}
