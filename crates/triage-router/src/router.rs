// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classifier provider selection and routing decisions.
//!
//! The classification strategy is a tagged variant chosen once at
//! construction: remote zero-shot call, local heuristic, or unavailable.
//! The router applies the default-label fallback when no strategy can
//! produce a label.

use std::sync::Arc;

use tracing::{debug, info, warn};
use triage_core::error::TriageError;
use triage_core::traits::ZeroShotClassifier;
use triage_core::types::InputKind;

use crate::classifier::KeywordClassifier;

/// Label every input routes to when classification is unavailable.
pub const DEFAULT_LABEL: InputKind = InputKind::Text;

/// Classification strategy, selected once at construction.
///
/// `Unavailable` signals the condition rather than guessing a label --
/// the routing layer owns the default-label fallback.
pub enum ClassifierProvider {
    /// Remote zero-shot classification via the inference service.
    Remote(Arc<dyn ZeroShotClassifier>),
    /// Local heuristic classification, no network.
    Local(KeywordClassifier),
    /// No strategy configured.
    Unavailable,
}

impl ClassifierProvider {
    /// Classifies `text` against `labels`, returning the top label.
    ///
    /// The result is always a member of `labels`. Fails with a
    /// configuration error when no strategy is available.
    pub async fn classify(
        &self,
        text: &str,
        labels: &[InputKind],
    ) -> Result<InputKind, TriageError> {
        match self {
            ClassifierProvider::Remote(classifier) => classifier.classify(text, labels).await,
            ClassifierProvider::Local(classifier) => classifier
                .rank(text)
                .into_iter()
                .find(|l| labels.contains(l))
                .or_else(|| labels.first().copied())
                .ok_or_else(|| {
                    TriageError::Internal("classify called with empty label set".to_string())
                }),
            ClassifierProvider::Unavailable => Err(TriageError::Config(
                "no classifier provider configured".to_string(),
            )),
        }
    }

    /// Whether a classification strategy exists.
    pub fn is_available(&self) -> bool {
        !matches!(self, ClassifierProvider::Unavailable)
    }
}

impl std::fmt::Debug for ClassifierProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierProvider::Remote(_) => write!(f, "ClassifierProvider::Remote"),
            ClassifierProvider::Local(_) => write!(f, "ClassifierProvider::Local"),
            ClassifierProvider::Unavailable => write!(f, "ClassifierProvider::Unavailable"),
        }
    }
}

/// A routing decision for one input.
#[derive(Debug, Clone)]
pub struct RoutingDecision {
    /// The label to dispatch to.
    pub label: InputKind,
    /// Whether the default-label fallback was applied.
    pub fallback: bool,
    /// Human-readable reason for the decision.
    pub reason: String,
}

/// Routes inputs to a label using the configured classification strategy.
#[derive(Debug)]
pub struct InputRouter {
    provider: ClassifierProvider,
}

impl InputRouter {
    /// Creates a router over the given provider.
    pub fn new(provider: ClassifierProvider) -> Self {
        Self { provider }
    }

    /// Decides the label for an input.
    ///
    /// Classification runs against the full candidate set. When the
    /// provider is unavailable or the call fails, the decision falls
    /// back to [`DEFAULT_LABEL`] -- routing never fails outright.
    pub async fn route(&self, input: &str) -> RoutingDecision {
        let labels = InputKind::all();
        match self.provider.classify(input, &labels).await {
            Ok(label) => {
                info!(label = %label, "input classified");
                RoutingDecision {
                    label,
                    fallback: false,
                    reason: "classified".to_string(),
                }
            }
            Err(TriageError::Config(msg)) => {
                debug!(reason = %msg, "classifier unavailable, routing to default label");
                RoutingDecision {
                    label: DEFAULT_LABEL,
                    fallback: true,
                    reason: msg,
                }
            }
            Err(e) => {
                warn!(error = %e, "classification failed, routing to default label");
                RoutingDecision {
                    label: DEFAULT_LABEL,
                    fallback: true,
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedClassifier(InputKind);

    #[async_trait]
    impl ZeroShotClassifier for FixedClassifier {
        async fn classify(
            &self,
            _text: &str,
            _labels: &[InputKind],
        ) -> Result<InputKind, TriageError> {
            Ok(self.0)
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl ZeroShotClassifier for FailingClassifier {
        async fn classify(
            &self,
            _text: &str,
            _labels: &[InputKind],
        ) -> Result<InputKind, TriageError> {
            Err(TriageError::Transport {
                message: "connection refused".into(),
                source: None,
            })
        }
    }

    #[tokio::test]
    async fn remote_provider_label_is_used() {
        let router = InputRouter::new(ClassifierProvider::Remote(Arc::new(FixedClassifier(
            InputKind::Image,
        ))));
        let decision = router.route("https://example.com/cat.jpg").await;
        assert_eq!(decision.label, InputKind::Image);
        assert!(!decision.fallback);
    }

    #[tokio::test]
    async fn unavailable_provider_defaults_to_text() {
        let router = InputRouter::new(ClassifierProvider::Unavailable);
        let decision = router.route("anything at all").await;
        assert_eq!(decision.label, InputKind::Text);
        assert!(decision.fallback);
        assert!(decision.reason.contains("no classifier"));
    }

    #[tokio::test]
    async fn transport_failure_defaults_to_text() {
        let router = InputRouter::new(ClassifierProvider::Remote(Arc::new(FailingClassifier)));
        let decision = router.route("https://example.com/page").await;
        assert_eq!(decision.label, InputKind::Text);
        assert!(decision.fallback);
    }

    #[tokio::test]
    async fn local_provider_ranks_input() {
        let router =
            InputRouter::new(ClassifierProvider::Local(KeywordClassifier::new()));
        let decision = router.route("report.pdf").await;
        assert_eq!(decision.label, InputKind::File);
        assert!(!decision.fallback);
    }

    #[tokio::test]
    async fn local_provider_respects_label_subset() {
        let provider = ClassifierProvider::Local(KeywordClassifier::new());
        // File outranks everything for "report.pdf", but when the caller
        // only offers text and link the best available match wins.
        let label = provider
            .classify("report.pdf", &[InputKind::Text, InputKind::Link])
            .await
            .unwrap();
        assert_eq!(label, InputKind::Text);
    }

    #[test]
    fn availability_flag() {
        assert!(ClassifierProvider::Local(KeywordClassifier::new()).is_available());
        assert!(!ClassifierProvider::Unavailable.is_available());
    }
}
