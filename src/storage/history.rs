// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout history persistence.
//!
//! Records are stored as a single JSON array. A payload that fails to
//! deserialize is discarded and treated as empty rather than surfaced to
//! callers — the aggregation layer only ever sees a well-typed (possibly
//! empty) list.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::WorkoutRecord;
use crate::storage::{files, write_json};

/// File-backed store for workout records.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store rooted in the given data directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(files::EXERCISE_LOGS),
        }
    }

    /// Load every persisted record.
    ///
    /// A missing file is an empty history. A file that fails to parse is
    /// deleted and reported as empty; its contents are unrecoverable and
    /// keeping it would fail every subsequent load.
    pub async fn load_all(&self) -> Result<Vec<WorkoutRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<WorkoutRecord>>(&bytes) {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Loaded workout records");
                Ok(records)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "Corrupted history file, discarding"
                );
                self.clear_all().await?;
                Ok(Vec::new())
            }
        }
    }

    /// Append one record.
    pub async fn append(&self, record: &WorkoutRecord) -> Result<()> {
        let mut records = self.load_all().await?;
        records.push(record.clone());
        write_json(&self.path, &records).await?;

        tracing::debug!(id = %record.id, total = records.len(), "Workout record saved");
        Ok(())
    }

    /// Delete one record by id; a no-op if the id is not present.
    pub async fn remove_by_id(&self, id: &str) -> Result<()> {
        let mut records = self.load_all().await?;
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            tracing::debug!(id, "Record not found, nothing to delete");
            return Ok(());
        }

        write_json(&self.path, &records).await?;
        tracing::debug!(id, "Workout record deleted");
        Ok(())
    }

    /// Delete every record (the data-reset action).
    pub async fn clear_all(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
