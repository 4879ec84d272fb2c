// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-zero capacities and coherent length bounds.

use crate::diagnostic::ConfigError;
use crate::model::TriageConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TriageConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.memory.short_term_capacity == 0 {
        errors.push(ConfigError::Validation {
            message: "memory.short_term_capacity must be at least 1".to_string(),
        });
    }

    if config.memory.long_term_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "memory.long_term_path must not be empty".to_string(),
        });
    }

    if config.memory.summary_min_length >= config.memory.summary_max_length {
        errors.push(ConfigError::Validation {
            message: format!(
                "memory.summary_min_length ({}) must be less than memory.summary_max_length ({})",
                config.memory.summary_min_length, config.memory.summary_max_length
            ),
        });
    }

    if config.inference.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "inference.timeout_secs must be at least 1".to_string(),
        });
    }

    // An endpoint without a key (or vice versa) is a half-configured
    // inference section and never what the user meant.
    match (&config.inference.endpoint, &config.inference.api_key) {
        (Some(_), None) => errors.push(ConfigError::Validation {
            message: "inference.endpoint is set but inference.api_key is missing".to_string(),
        }),
        (None, Some(_)) => errors.push(ConfigError::Validation {
            message: "inference.api_key is set but inference.endpoint is missing".to_string(),
        }),
        _ => {}
    }

    if config.conversation_log.enabled && config.inference.endpoint.is_none() {
        errors.push(ConfigError::Validation {
            message: "conversation_log.enabled requires the [inference] section to be configured"
                .to_string(),
        });
    }

    if config.handlers.fetch_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "handlers.fetch_timeout_secs must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = TriageConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_capacity_fails_validation() {
        let mut config = TriageConfig::default();
        config.memory.short_term_capacity = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("short_term_capacity"))
        ));
    }

    #[test]
    fn inverted_summary_bounds_fail_validation() {
        let mut config = TriageConfig::default();
        config.memory.summary_min_length = 200;
        config.memory.summary_max_length = 100;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("summary_min_length"))
        ));
    }

    #[test]
    fn half_configured_inference_fails_validation() {
        let mut config = TriageConfig::default();
        config.inference.endpoint = Some("https://inference.example.com".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("api_key"))
        ));
    }

    #[test]
    fn conversation_log_requires_inference() {
        let mut config = TriageConfig::default();
        config.conversation_log.enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("conversation_log"))
        ));
    }

    #[test]
    fn fully_configured_inference_passes() {
        let mut config = TriageConfig::default();
        config.inference.endpoint = Some("https://inference.example.com".to_string());
        config.inference.api_key = Some("key-123".to_string());
        config.conversation_log.enabled = true;
        assert!(validate_config(&config).is_ok());
    }
}
