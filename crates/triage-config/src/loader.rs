// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./triage.toml` > `~/.config/triage/triage.toml` >
//! `/etc/triage/triage.toml` with environment variable overrides via the
//! `TRIAGE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TriageConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/triage/triage.toml` (system-wide)
/// 3. `~/.config/triage/triage.toml` (user XDG config)
/// 4. `./triage.toml` (local directory)
/// 5. `TRIAGE_*` environment variables
pub fn load_config() -> Result<TriageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TriageConfig::default()))
        .merge(Toml::file("/etc/triage/triage.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("triage/triage.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("triage.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<TriageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TriageConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TriageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TriageConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `TRIAGE_MEMORY_LONG_TERM_PATH` must map
/// to `memory.long_term_path`, not `memory.long.term.path`.
fn env_provider() -> Env {
    Env::prefixed("TRIAGE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: TRIAGE_MEMORY_LONG_TERM_PATH -> "memory_long_term_path"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("inference_", "inference.", 1)
            .replacen("classifier_", "classifier.", 1)
            .replacen("memory_", "memory.", 1)
            .replacen("conversation_log_", "conversation_log.", 1)
            .replacen("handlers_", "handlers.", 1);
        mapped.into()
    })
}
