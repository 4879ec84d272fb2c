// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Link handler: fetches a URL and extracts the page title and first
//! paragraph from its HTML.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};
use serde_json::json;
use tracing::debug;
use triage_core::error::TriageError;
use triage_core::traits::ContentHandler;
use triage_core::types::{HandlerOutput, InputKind, ResultEnvelope, RoutingState};

use crate::stamped_metadata;

/// Sentinel title for documents without a `<title>` element.
const NO_TITLE: &str = "No Title";

/// Sentinel content for documents without a `<p>` element.
const NO_CONTENT: &str = "No Content";

/// Handles link inputs by fetching and parsing the referenced page.
pub struct LinkHandler {
    client: reqwest::Client,
}

impl LinkHandler {
    /// Creates a link handler with the given User-Agent and fetch timeout.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, TriageError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TriageError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentHandler for LinkHandler {
    fn kind(&self) -> InputKind {
        InputKind::Link
    }

    async fn process(&self, state: &RoutingState) -> Result<ResultEnvelope, TriageError> {
        let url = &state.input;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TriageError::Transport {
                message: format!("failed to fetch {url}: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriageError::Transport {
                message: format!("fetching {url} returned {status}"),
                source: None,
            });
        }

        let html = response.text().await.map_err(|e| TriageError::Transport {
            message: format!("failed to read body from {url}: {e}"),
            source: Some(Box::new(e)),
        })?;

        let (title, content) = extract_title_and_content(&html);
        debug!(url = %url, title = %title, "link parsed");

        let mut metadata = stamped_metadata();
        metadata.insert("source".to_string(), url.clone());

        Ok(ResultEnvelope {
            kind: InputKind::Link,
            input: state.input.clone(),
            output: HandlerOutput::Structured(json!({
                "title": title,
                "content": content,
            })),
            metadata,
        })
    }
}

/// Extracts `(title, first paragraph)` from an HTML document, applying
/// the sentinel defaults when either is absent or empty.
fn extract_title_and_content(html: &str) -> (String, String) {
    let document = Html::parse_document(html);

    let title = Selector::parse("title")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string());

    let content = Selector::parse("p")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| NO_CONTENT.to_string());

    (title, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn extracts_title_and_first_paragraph() {
        let html = r#"
        <html><head><title>Example Page</title></head>
        <body><p>First paragraph.</p><p>Second paragraph.</p></body></html>
        "#;
        let (title, content) = extract_title_and_content(html);
        assert_eq!(title, "Example Page");
        assert_eq!(content, "First paragraph.");
    }

    #[test]
    fn missing_title_uses_sentinel() {
        let html = "<html><body><p>Only content here.</p></body></html>";
        let (title, content) = extract_title_and_content(html);
        assert_eq!(title, "No Title");
        assert_eq!(content, "Only content here.");
    }

    #[test]
    fn missing_paragraph_uses_sentinel() {
        let html = "<html><head><title>Bare</title></head><body><div>no p tag</div></body></html>";
        let (title, content) = extract_title_and_content(html);
        assert_eq!(title, "Bare");
        assert_eq!(content, "No Content");
    }

    #[test]
    fn empty_document_uses_both_sentinels() {
        let (title, content) = extract_title_and_content("");
        assert_eq!(title, "No Title");
        assert_eq!(content, "No Content");
    }

    #[test]
    fn whitespace_only_title_uses_sentinel() {
        let html = "<html><head><title>   </title></head><body></body></html>";
        let (title, _) = extract_title_and_content(html);
        assert_eq!(title, "No Title");
    }

    #[tokio::test]
    async fn fetches_and_parses_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html><head><title>News</title></head><body><p>Breaking story.</p></body></html>",
            ))
            .mount(&server)
            .await;

        let handler = LinkHandler::new("triage-test/0.1", 5).unwrap();
        let state = RoutingState {
            input: format!("{}/article", server.uri()),
            extra: Default::default(),
        };

        let result = handler.process(&state).await.unwrap();
        assert_eq!(result.kind, InputKind::Link);
        match &result.output {
            HandlerOutput::Structured(value) => {
                assert_eq!(value["title"], "News");
                assert_eq!(value["content"], "Breaking story.");
            }
            other => panic!("expected structured output, got {other:?}"),
        }
        assert!(result.metadata.contains_key("timestamp"));
    }

    #[tokio::test]
    async fn non_success_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let handler = LinkHandler::new("triage-test/0.1", 5).unwrap();
        let state = RoutingState {
            input: format!("{}/missing", server.uri()),
            extra: Default::default(),
        };

        let err = handler.process(&state).await.unwrap_err();
        assert!(matches!(err, TriageError::Transport { .. }));
    }
}
