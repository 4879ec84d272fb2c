// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic input label classification.
//!
//! Ranks the four input labels (text, image, file, link) from surface
//! signals of the raw input. No model call, no network, no latency --
//! this is the local strategy behind the classifier provider.

use triage_core::types::InputKind;

/// Image file extensions (matched against the path tail, case-insensitive).
const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp", ".svg", ".tif", ".tiff", ".ico",
];

/// Document extensions the file handler understands.
const DOCUMENT_EXTENSIONS: &[&str] = &[".pdf", ".csv"];

/// Prefixes that mark an input as a web link.
const URL_PREFIXES: &[&str] = &["http://", "https://", "www."];

/// Result of classifying an input's label.
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    /// The top-ranked label.
    pub label: InputKind,
    /// Confidence in the classification (0.0-1.0).
    pub confidence: f32,
    /// Human-readable reason for the classification.
    pub reason: &'static str,
}

/// Heuristic label classifier with zero cost and zero latency.
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Creates a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classifies an input, returning the top label with confidence.
    pub fn classify(&self, input: &str) -> ClassificationResult {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ClassificationResult {
                label: InputKind::Text,
                confidence: 1.0,
                reason: "empty input",
            };
        }

        let (scores, reason) = Self::score(trimmed);
        let ranked = Self::ranked(&scores);
        let top = ranked[0];
        let top_score = scores[Self::index_of(top)];
        let runner_up = scores[Self::index_of(ranked[1])];

        // Confidence grows with the margin between the top label and the
        // runner-up; a dead heat is still reported, just with low confidence.
        let margin = top_score.saturating_sub(runner_up);
        let confidence = (margin as f32 / 4.0).clamp(0.25, 1.0);

        ClassificationResult {
            label: top,
            confidence,
            reason,
        }
    }

    /// Ranks all four labels for an input, best first.
    pub fn rank(&self, input: &str) -> Vec<InputKind> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return InputKind::all().to_vec();
        }
        let (scores, _) = Self::score(trimmed);
        Self::ranked(&scores).to_vec()
    }

    /// Scores each label from surface signals. Returns the scores in
    /// `InputKind::all()` order along with the dominant signal's reason.
    fn score(input: &str) -> ([i32; 4], &'static str) {
        let lower = input.to_lowercase();
        let mut scores = [0i32; 4]; // text, image, file, link
        let mut reason = "prose input";

        let single_token = !input.contains(char::is_whitespace);
        let is_url = URL_PREFIXES.iter().any(|p| lower.starts_with(p));
        // Strip query string and fragment before extension matching.
        let path_tail = lower
            .split(['?', '#'])
            .next()
            .unwrap_or(&lower)
            .to_string();
        let has_image_ext = IMAGE_EXTENSIONS.iter().any(|e| path_tail.ends_with(e));
        let has_document_ext = DOCUMENT_EXTENSIONS.iter().any(|e| path_tail.ends_with(e));

        // Signal 1: URL shape
        if is_url {
            scores[Self::index_of(InputKind::Link)] += 3;
            reason = "url shape";
        }

        // Signal 2: image extension -- an image URL is an image, not a link
        if has_image_ext && (is_url || single_token) {
            scores[Self::index_of(InputKind::Image)] += 5;
            reason = "image extension";
        }

        // Signal 3: document extension on a bare path
        if has_document_ext && !is_url && single_token {
            scores[Self::index_of(InputKind::File)] += 4;
            reason = "document extension";
        }

        // Signal 4: bare token with an unrecognized extension still leans file
        if single_token && !is_url && !has_image_ext && !has_document_ext {
            if let Some(ext) = path_tail.rsplit('.').next() {
                if ext.len() <= 5 && path_tail.contains('.') && ext.chars().all(char::is_alphanumeric)
                {
                    scores[Self::index_of(InputKind::File)] += 2;
                    reason = "file-like token";
                }
            }
        }

        // Signal 5: prose -- multiple words or a question
        let word_count = input.split_whitespace().count();
        if word_count >= 2 {
            scores[Self::index_of(InputKind::Text)] += 2;
        }
        if input.trim_end().ends_with('?') {
            scores[Self::index_of(InputKind::Text)] += 1;
        }

        // Baseline: anything can be treated as text.
        scores[Self::index_of(InputKind::Text)] += 1;

        (scores, reason)
    }

    /// Orders labels by score, best first. Ties keep `InputKind::all()` order.
    fn ranked(scores: &[i32; 4]) -> [InputKind; 4] {
        let mut labels = InputKind::all();
        labels.sort_by_key(|l| -scores[Self::index_of(*l)]);
        labels
    }

    fn index_of(kind: InputKind) -> usize {
        match kind {
            InputKind::Text => 0,
            InputKind::Image => 1,
            InputKind::File => 2,
            InputKind::Link => 3,
        }
    }
}
