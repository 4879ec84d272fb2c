// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Triage - a classification-driven input dispatcher.
//!
//! This is the binary entry point. It loads configuration, initializes
//! tracing, and runs the selected subcommand.

mod shell;

use clap::{Parser, Subcommand};
use colored::Colorize;
use triage_config::TriageConfig;
use triage_core::error::TriageError;
use triage_memory::LongTermMemory;

/// Triage - route text, images, files, and links to specialized handlers.
#[derive(Parser, Debug)]
#[command(name = "triage", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive dispatch shell.
    Shell,
    /// Print stored long-term memory records.
    Memory,
    /// Validate and print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match triage_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            triage_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Shell) | None => shell::run_shell(config).await,
        Some(Commands::Memory) => show_memory(&config).await,
        Some(Commands::Config) => show_config(&config),
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber. `RUST_LOG` overrides the
/// configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints all long-term memory records in insertion order.
async fn show_memory(config: &TriageConfig) -> Result<(), TriageError> {
    let store = LongTermMemory::open(&config.memory.long_term_path)?;
    let records = store.get_all().await;

    if records.is_empty() {
        println!("{}", "no long-term memory records".dimmed());
        return Ok(());
    }

    for (i, message) in records.iter().enumerate() {
        println!("{} {message}", format!("{:>4}", i + 1).dimmed());
    }
    Ok(())
}

/// Prints the effective configuration as TOML.
fn show_config(config: &TriageConfig) -> Result<(), TriageError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| TriageError::Internal(format!("failed to render config: {e}")))?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config = triage_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.agent.name, "triage");
    }
}
