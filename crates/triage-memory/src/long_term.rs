// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Long-term conversational memory: an ordered, append-only sequence of
//! summary records.
//!
//! Two backends: a local newline-delimited JSON file (one record per
//! line, UTF-8, flushed before `add` returns) or a remote summary sink.
//! Construction loads any pre-existing file-backed records, preserving
//! historical order. Records are never mutated or deleted.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;
use triage_core::error::TriageError;
use triage_core::traits::SummarySink;
use triage_core::types::SummaryRecord;

enum Backend {
    /// Local JSONL file, appended and flushed synchronously.
    File(PathBuf),
    /// Remote persisted store.
    Remote(Arc<dyn SummarySink>),
}

struct Inner {
    backend: Backend,
    records: Vec<SummaryRecord>,
}

/// Append-only store of summary records.
///
/// The interior mutex serializes concurrent appends, preserving the
/// append-only ordering invariant under concurrent dispatches.
pub struct LongTermMemory {
    inner: Mutex<Inner>,
}

impl std::fmt::Debug for LongTermMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LongTermMemory").finish_non_exhaustive()
    }
}

impl LongTermMemory {
    /// Opens a file-backed store, loading any pre-existing records.
    ///
    /// A missing file is an empty store; it is created on first append.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TriageError> {
        let path = path.as_ref().to_path_buf();
        let records = load_records(&path)?;
        debug!(path = %path.display(), count = records.len(), "long-term store opened");
        Ok(Self {
            inner: Mutex::new(Inner {
                backend: Backend::File(path),
                records,
            }),
        })
    }

    /// Creates a store backed by a remote summary sink.
    ///
    /// Appends are forwarded to the sink and mirrored in memory so
    /// `get_all` keeps its ordered contract.
    pub fn remote(sink: Arc<dyn SummarySink>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                backend: Backend::Remote(sink),
                records: Vec::new(),
            }),
        }
    }

    /// Appends a summary record. Durable once this returns: file-backed
    /// appends are flushed to disk, remote appends are acknowledged by
    /// the sink.
    pub async fn add(&self, message: impl Into<String>) -> Result<(), TriageError> {
        let record = SummaryRecord {
            message: message.into(),
        };

        let mut inner = self.inner.lock().await;
        match &inner.backend {
            Backend::File(path) => append_record(path, &record)?,
            Backend::Remote(sink) => sink.persist(&record).await?,
        }
        inner.records.push(record);
        Ok(())
    }

    /// Returns all stored messages in original insertion order.
    pub async fn get_all(&self) -> Vec<String> {
        let inner = self.inner.lock().await;
        inner.records.iter().map(|r| r.message.clone()).collect()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.records.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Reads all records from a JSONL file. Missing file means empty store.
fn load_records(path: &Path) -> Result<Vec<SummaryRecord>, TriageError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(TriageError::Storage {
                source: Box::new(e),
            })
        }
    };

    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| TriageError::Storage {
            source: Box::new(e),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record: SummaryRecord =
            serde_json::from_str(&line).map_err(|e| TriageError::Storage {
                source: Box::new(e),
            })?;
        records.push(record);
    }
    Ok(records)
}

/// Appends one record as a JSON line and flushes it to disk.
fn append_record(path: &Path, record: &SummaryRecord) -> Result<(), TriageError> {
    let line = serde_json::to_string(record).map_err(|e| TriageError::Storage {
        source: Box::new(e),
    })?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TriageError::Storage {
            source: Box::new(e),
        })?;
    writeln!(file, "{line}").map_err(|e| TriageError::Storage {
        source: Box::new(e),
    })?;
    file.sync_all().map_err(|e| TriageError::Storage {
        source: Box::new(e),
    })
}
