// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the triage configuration system.

use triage_config::diagnostic::ConfigError;
use triage_config::model::TriageConfig;
use triage_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_triage_config() {
    let toml = r#"
[agent]
name = "test-agent"
log_level = "debug"

[inference]
endpoint = "https://inference.example.com"
api_key = "key-123"
timeout_secs = 10

[classifier]
local_fallback = false

[memory]
short_term_capacity = 3
long_term_path = "/tmp/test-memory.jsonl"
summary_max_length = 100
summary_min_length = 20

[conversation_log]
enabled = true

[handlers]
user_agent = "test/1.0"
fetch_timeout_secs = 5
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-agent");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(
        config.inference.endpoint.as_deref(),
        Some("https://inference.example.com")
    );
    assert_eq!(config.inference.api_key.as_deref(), Some("key-123"));
    assert_eq!(config.inference.timeout_secs, 10);
    assert!(!config.classifier.local_fallback);
    assert_eq!(config.memory.short_term_capacity, 3);
    assert_eq!(config.memory.long_term_path, "/tmp/test-memory.jsonl");
    assert_eq!(config.memory.summary_max_length, 100);
    assert_eq!(config.memory.summary_min_length, 20);
    assert!(config.conversation_log.enabled);
    assert_eq!(config.handlers.user_agent, "test/1.0");
    assert_eq!(config.handlers.fetch_timeout_secs, 5);
}

/// Unknown field in a section produces an error.
#[test]
fn unknown_field_in_inference_produces_error() {
    let toml = r#"
[inference]
endpiont = "https://example.com"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("endpiont"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "triage");
    assert_eq!(config.agent.log_level, "info");
    assert!(config.inference.endpoint.is_none());
    assert!(config.inference.api_key.is_none());
    assert!(config.classifier.local_fallback);
    assert_eq!(config.memory.short_term_capacity, 5);
    assert!(!config.conversation_log.enabled);
}

/// Environment variable style override via dot notation merges correctly.
#[test]
fn dotted_override_maps_to_nested_key() {
    use figment::{providers::Serialized, Figment};

    // TRIAGE_MEMORY_LONG_TERM_PATH maps to memory.long_term_path
    // (not memory.long.term.path); exercised here via dot notation.
    let config: TriageConfig = Figment::new()
        .merge(Serialized::defaults(TriageConfig::default()))
        .merge(("memory.long_term_path", "/tmp/env-override.jsonl"))
        .extract()
        .expect("should set long_term_path via dot notation");

    assert_eq!(config.memory.long_term_path, "/tmp/env-override.jsonl");
}

/// Validation rejects a half-configured inference section through the
/// high-level entry point.
#[test]
fn load_and_validate_rejects_half_configured_inference() {
    let toml = r#"
[inference]
endpoint = "https://inference.example.com"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("api_key"))
    ));
}

/// Unknown keys surface as UnknownKey diagnostics with a suggestion.
#[test]
fn unknown_key_gets_suggestion() {
    let toml = r#"
[memory]
short_term_capasity = 3
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey {
                key, suggestion, ..
            } => Some((key.clone(), suggestion.clone())),
            _ => None,
        })
        .expect("should produce an UnknownKey error");
    assert_eq!(unknown.0, "short_term_capasity");
    assert_eq!(unknown.1.as_deref(), Some("short_term_capacity"));
}
