// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the triage dispatcher.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level triage configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TriageConfig {
    /// Agent identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Hosted inference service settings.
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Input classification settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Two-tier memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// External conversation logging settings.
    #[serde(default)]
    pub conversation_log: ConversationLogConfig,

    /// Content handler settings.
    #[serde(default)]
    pub handlers: HandlerConfig,
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "triage".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Hosted inference service configuration.
///
/// When `endpoint` or `api_key` is unset, remote classification,
/// summarization, captioning, and generation are unavailable; the router
/// falls back to the local classifier (if enabled) or the default label.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InferenceConfig {
    /// Base URL of the inference service. `None` disables remote providers.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// API key sent in the `api-key` header. `None` disables remote providers.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Input classification configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Use the local heuristic classifier when the remote provider is
    /// unconfigured. When false and no remote provider exists, every
    /// input routes to the default `text` label.
    #[serde(default = "default_local_fallback")]
    pub local_fallback: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            local_fallback: default_local_fallback(),
        }
    }
}

fn default_local_fallback() -> bool {
    true
}

/// Two-tier memory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Capacity of the short-term rolling buffer.
    #[serde(default = "default_short_term_capacity")]
    pub short_term_capacity: usize,

    /// Path to the long-term newline-delimited JSON store.
    #[serde(default = "default_long_term_path")]
    pub long_term_path: String,

    /// Upper length hint passed to the summarization provider.
    #[serde(default = "default_summary_max_length")]
    pub summary_max_length: u32,

    /// Lower length hint passed to the summarization provider.
    #[serde(default = "default_summary_min_length")]
    pub summary_min_length: u32,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            short_term_capacity: default_short_term_capacity(),
            long_term_path: default_long_term_path(),
            summary_max_length: default_summary_max_length(),
            summary_min_length: default_summary_min_length(),
        }
    }
}

fn default_short_term_capacity() -> usize {
    5
}

fn default_long_term_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("triage").join("long_term_memory.jsonl"))
        .unwrap_or_else(|| std::path::PathBuf::from("long_term_memory.jsonl"))
        .to_string_lossy()
        .into_owned()
}

fn default_summary_max_length() -> u32 {
    130
}

fn default_summary_min_length() -> u32 {
    30
}

/// External conversation logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConversationLogConfig {
    /// Enable fire-and-forget conversation logging to the inference
    /// service. Requires the inference section to be configured.
    #[serde(default = "default_conversation_log_enabled")]
    pub enabled: bool,
}

impl Default for ConversationLogConfig {
    fn default() -> Self {
        Self {
            enabled: default_conversation_log_enabled(),
        }
    }
}

fn default_conversation_log_enabled() -> bool {
    false
}

/// Content handler configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfig {
    /// User-Agent header sent by the link handler.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout in seconds for link fetches.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_user_agent() -> String {
    "triage/0.1".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}
