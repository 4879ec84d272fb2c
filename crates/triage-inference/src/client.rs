// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the hosted inference service.
//!
//! Provides [`InferenceClient`] which handles request construction,
//! `api-key` authentication, and transient error retry for the
//! classification, summarization, captioning, generation, conversation
//! logging, and summary persistence endpoints.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use triage_config::model::InferenceConfig;
use triage_core::error::TriageError;
use triage_core::traits::{
    Captioner, ConversationLogger, SummarySink, Summarizer, TextGenerator, ZeroShotClassifier,
};
use triage_core::types::{InputKind, SummaryRecord};

use crate::types::{
    AckResponse, ApiErrorResponse, CaptionRequest, CaptionResponse, ClassifyRequest,
    ClassifyResponse, GenerateRequest, GenerateResponse, LogMessageRequest, SummarizeRequest,
    SummarizeResponse,
};

/// HTTP client for inference service communication.
///
/// Manages authentication headers, connection pooling, and retry logic
/// for transient errors (429, 500, 503).
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl InferenceClient {
    /// Creates a new inference service client.
    ///
    /// # Arguments
    /// * `endpoint` - Base URL of the inference service
    /// * `api_key` - API key sent in the `api-key` header
    /// * `timeout_secs` - Per-request timeout
    pub fn new(
        endpoint: String,
        api_key: String,
        timeout_secs: u64,
    ) -> Result<Self, TriageError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "api-key",
            HeaderValue::from_str(&api_key)
                .map_err(|e| TriageError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TriageError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
            max_retries: 1,
        })
    }

    /// Creates a client from the inference config section.
    ///
    /// Fails with a configuration error when `endpoint` or `api_key` is
    /// unset -- callers treat that as "remote providers unavailable".
    pub fn from_config(config: &InferenceConfig) -> Result<Self, TriageError> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| TriageError::Config("inference.endpoint not set".to_string()))?;
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| TriageError::Config("inference.api_key not set".to_string()))?;
        Self::new(endpoint, api_key, config.timeout_secs)
    }

    /// POSTs a JSON body to `path` and deserializes the JSON response.
    ///
    /// On transient errors (429, 500, 503), retries once after a 1-second delay.
    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, TriageError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, path, "retrying inference request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .post(&url)
                .json(body)
                .send()
                .await
                .map_err(|e| TriageError::Transport {
                    message: format!("HTTP request to {path} failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, path, attempt, "inference response received");

            if status.is_success() {
                let text = response.text().await.map_err(|e| TriageError::Transport {
                    message: format!("failed to read response body from {path}: {e}"),
                    source: Some(Box::new(e)),
                })?;
                return serde_json::from_str(&text).map_err(|e| TriageError::Transport {
                    message: format!("failed to parse response from {path}: {e}"),
                    source: Some(Box::new(e)),
                });
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, path, "transient error, will retry");
                last_error = Some(TriageError::Transport {
                    message: format!("inference service returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!("inference service error ({status}): {}", api_err.message)
            } else {
                format!("inference service returned {status}: {body}")
            };
            return Err(TriageError::Transport {
                message,
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| TriageError::Transport {
            message: format!("request to {path} failed after retries"),
            source: None,
        }))
    }
}

#[async_trait]
impl ZeroShotClassifier for InferenceClient {
    async fn classify(&self, text: &str, labels: &[InputKind]) -> Result<InputKind, TriageError> {
        let request = ClassifyRequest {
            text: text.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        };
        let response: ClassifyResponse = self.post_json("/classify", &request).await?;

        // The service must answer with one of the candidates; anything
        // else degrades to the first (default) label.
        let label = InputKind::from_str(&response.label)
            .ok()
            .filter(|l| labels.contains(l));
        match label {
            Some(l) => Ok(l),
            None => {
                warn!(
                    label = %response.label,
                    "classifier returned a label outside the candidate set, using default"
                );
                labels.first().copied().ok_or_else(|| {
                    TriageError::Internal("classify called with empty label set".to_string())
                })
            }
        }
    }
}

#[async_trait]
impl Summarizer for InferenceClient {
    async fn summarize(
        &self,
        text: &str,
        max_length: u32,
        min_length: u32,
    ) -> Result<String, TriageError> {
        let request = SummarizeRequest {
            text: text.to_string(),
            max_length,
            min_length,
        };
        let response: SummarizeResponse = self.post_json("/summarize", &request).await?;
        Ok(response.summary)
    }
}

#[async_trait]
impl Captioner for InferenceClient {
    async fn caption(&self, image_ref: &str) -> Result<String, TriageError> {
        let request = CaptionRequest {
            image_url: image_ref.to_string(),
        };
        let response: CaptionResponse = self.post_json("/caption", &request).await?;
        Ok(response.caption)
    }
}

#[async_trait]
impl TextGenerator for InferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String, TriageError> {
        let request = GenerateRequest {
            prompt: prompt.to_string(),
        };
        let response: GenerateResponse = self.post_json("/generate", &request).await?;
        Ok(response.text)
    }
}

#[async_trait]
impl ConversationLogger for InferenceClient {
    async fn log_message(
        &self,
        conversation_id: &str,
        role: &str,
        content: &str,
    ) -> Result<(), TriageError> {
        let request = LogMessageRequest {
            conversation_id: conversation_id.to_string(),
            role: role.to_string(),
            content: content.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        let _: AckResponse = self.post_json("/log", &request).await?;
        Ok(())
    }
}

#[async_trait]
impl SummarySink for InferenceClient {
    async fn persist(&self, record: &SummaryRecord) -> Result<(), TriageError> {
        let _: AckResponse = self.post_json("/memory", record).await?;
        Ok(())
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
