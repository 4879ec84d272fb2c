// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `triage shell` command implementation.
//!
//! Launches an interactive REPL with a colored prompt and readline
//! history. Each line becomes one input envelope dispatched end-to-end;
//! the normalized response envelope is printed as JSON. Creates a new
//! conversation per invocation.

use std::sync::Arc;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{info, warn};
use triage_agent::Dispatcher;
use triage_config::TriageConfig;
use triage_core::error::TriageError;
use triage_core::traits::{
    Captioner, ContentHandler, ConversationLogger, Summarizer, TextGenerator, ZeroShotClassifier,
};
use triage_core::types::{InputEnvelope, ResponseEnvelope};
use triage_handlers::{FileHandler, ImageHandler, LinkHandler, TextHandler};
use triage_inference::InferenceClient;
use triage_memory::{LongTermMemory, ShortTermMemory};
use triage_router::{ClassifierProvider, InputRouter, KeywordClassifier};

/// Runs the `triage shell` interactive REPL.
///
/// Builds the dispatcher from configuration, prompts for input, and
/// prints each response envelope. Uses one fresh conversation id for the
/// whole session.
pub async fn run_shell(config: TriageConfig) -> Result<(), TriageError> {
    let dispatcher = build_dispatcher(&config)?;
    let conversation_id = uuid::Uuid::new_v4().to_string();

    let mut rl = DefaultEditor::new()
        .map_err(|e| TriageError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "triage shell".bold().green());
    println!(
        "Type {} to exit, {} to inspect recent memory.\n",
        "/quit".yellow(),
        "/context".yellow()
    );

    let prompt = format!("{}> ", "triage".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed == "/context" {
                    for entry in dispatcher.short_term_context().await {
                        println!("{} {entry}", "-".dimmed());
                    }
                    continue;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let mut envelope = InputEnvelope::new(trimmed)
                    .with_conversation_id(conversation_id.clone());
                if let Some(file_type) = infer_file_type(trimmed) {
                    envelope = envelope.with_metadata("file_type", file_type);
                }

                let response = dispatcher.process_input(envelope).await;
                print_response(&response);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                // Ctrl+C / Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Wires the dispatcher from configuration.
///
/// The inference client is optional: without it, classification falls
/// back to the local heuristic (or the default label), summaries degrade
/// to raw buffer text, and the text/image handlers are not registered.
fn build_dispatcher(config: &TriageConfig) -> Result<Dispatcher, TriageError> {
    let client = match InferenceClient::from_config(&config.inference) {
        Ok(client) => Some(Arc::new(client)),
        Err(TriageError::Config(reason)) => {
            info!(reason = %reason, "inference service not configured, remote providers disabled");
            None
        }
        Err(e) => return Err(e),
    };

    // Classification strategy, chosen once.
    let provider = match (&client, config.classifier.local_fallback) {
        (Some(client), _) => {
            ClassifierProvider::Remote(client.clone() as Arc<dyn ZeroShotClassifier>)
        }
        (None, true) => ClassifierProvider::Local(KeywordClassifier::new()),
        (None, false) => ClassifierProvider::Unavailable,
    };
    let router = InputRouter::new(provider);

    // Handler registry. File and link handlers are purely local; text and
    // image need the inference service.
    let mut handlers: Vec<Arc<dyn ContentHandler>> = vec![
        Arc::new(FileHandler::new()),
        Arc::new(LinkHandler::new(
            &config.handlers.user_agent,
            config.handlers.fetch_timeout_secs,
        )?),
    ];
    if let Some(client) = &client {
        handlers.push(Arc::new(TextHandler::new(
            client.clone() as Arc<dyn TextGenerator>
        )));
        handlers.push(Arc::new(ImageHandler::new(
            client.clone() as Arc<dyn Captioner>
        )));
    } else {
        warn!("text and image handlers disabled (inference service not configured)");
    }

    let mut short_term = ShortTermMemory::new(config.memory.short_term_capacity);
    if let Some(client) = &client {
        short_term = short_term.with_summarizer(
            client.clone() as Arc<dyn Summarizer>,
            config.memory.summary_max_length,
            config.memory.summary_min_length,
        );
    }

    let path = std::path::Path::new(&config.memory.long_term_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TriageError::Storage {
                source: Box::new(e),
            })?;
        }
    }
    let long_term = Arc::new(LongTermMemory::open(path)?);

    let logger = match (&client, config.conversation_log.enabled) {
        (Some(client), true) => Some(client.clone() as Arc<dyn ConversationLogger>),
        _ => None,
    };

    Ok(Dispatcher::new(
        router, handlers, short_term, long_term, logger,
    ))
}

/// Infers the `file_type` routing hint from a bare path input.
///
/// Shell convenience only -- transport layers pass the hint explicitly
/// via envelope metadata.
fn infer_file_type(input: &str) -> Option<&'static str> {
    if input.contains(char::is_whitespace) {
        return None;
    }
    let lower = input.to_lowercase();
    if lower.ends_with(".pdf") {
        Some("pdf")
    } else if lower.ends_with(".csv") {
        Some("csv")
    } else {
        None
    }
}

/// Prints a response envelope: results as pretty JSON, errors to stderr.
fn print_response(response: &ResponseEnvelope) {
    match response {
        ResponseEnvelope::Success { .. } => {
            let rendered = serde_json::to_string_pretty(response)
                .unwrap_or_else(|_| "<unprintable response>".to_string());
            println!("{rendered}");
        }
        ResponseEnvelope::Error { message, .. } => {
            eprintln!("{}: {message}", "error".red());
        }
    }
}
