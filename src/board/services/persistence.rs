//! Persistence bridge between the task store and a blob store.
//!
//! The snapshot is one JSON object keyed by task id:
//!
//! ```json
//! {
//!   "0190f1c2-...": {
//!     "title": "Buy milk",
//!     "description": "2%",
//!     "createdAt": "2026-01-01T09:30:00Z",
//!     "column": "todo",
//!     "order": 0,
//!     "isNew": false
//!   }
//! }
//! ```
//!
//! Reads are lenient. A snapshot that cannot be read or parsed yields an empty
//! board, and individual records with missing fields are defaulted rather than
//! rejected. Write failures are logged and swallowed: the in-memory board
//! stays authoritative for the session.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::board::{
    domain::{BoardState, Column, PersistedTaskData, Task, TaskId},
    ports::{BlobStore, BlobStoreError},
};

/// Errors raised while encoding or decoding snapshots.
///
/// These never escape the bridge's `load` and `save`; they are exposed for
/// callers using [`encode`] and [`decode`] directly.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The snapshot is not valid JSON of the expected shape.
    #[error("malformed board snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The blob store failed.
    #[error(transparent)]
    Store(#[from] BlobStoreError),
}

/// On-the-wire task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    column: Option<String>,
    #[serde(default)]
    order: Option<i64>,
    #[serde(default)]
    is_new: Option<bool>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            title: Some(task.title().to_owned()),
            description: Some(task.description().to_owned()),
            created_at: Some(task.created_at()),
            column: Some(task.column().as_str().to_owned()),
            order: i64::try_from(task.order()).ok(),
            is_new: Some(task.is_new()),
        }
    }
}

/// Serializes the whole board.
///
/// # Errors
///
/// Returns [`PersistenceError::Malformed`] if serialization fails.
pub fn encode(state: &BoardState) -> Result<String, PersistenceError> {
    let records: BTreeMap<String, TaskRecord> = state
        .iter()
        .map(|task| (task.storage_key(), TaskRecord::from(task)))
        .collect();
    Ok(serde_json::to_string(&records)?)
}

/// Deserializes a snapshot.
///
/// Records are defaulted field by field; records with a blank key or a blank
/// title are skipped. Keys that are not UUIDs are kept verbatim for the next
/// write. Orders are not re-ranked here.
///
/// # Errors
///
/// Returns [`PersistenceError::Malformed`] when `raw` is not a JSON object of
/// records.
pub fn decode(raw: &str, clock: &impl Clock) -> Result<BoardState, PersistenceError> {
    let records: BTreeMap<String, serde_json::Value> = serde_json::from_str(raw)?;
    let loaded_at = clock.utc();
    Ok(records
        .into_iter()
        .filter_map(|(key, value)| decode_record(&key, value, loaded_at))
        .collect())
}

fn decode_record(key: &str, value: serde_json::Value, loaded_at: DateTime<Utc>) -> Option<Task> {
    let Ok(id) = key.parse::<TaskId>() else {
        warn!(key, "skipping persisted task with blank id");
        return None;
    };
    let storage_key = (key != id.to_string()).then(|| key.to_owned());
    let record: TaskRecord = match serde_json::from_value(value) {
        Ok(record) => record,
        Err(err) => {
            warn!(task_id = %id, error = %err, "skipping malformed persisted task");
            return None;
        }
    };
    let Some(title) = record.title.filter(|title| !title.trim().is_empty()) else {
        warn!(task_id = %id, "skipping persisted task without title");
        return None;
    };
    let column = record
        .column
        .as_deref()
        .and_then(|raw| Column::try_from(raw).ok())
        .unwrap_or(Column::Todo);
    let order = record
        .order
        .and_then(|order| usize::try_from(order).ok())
        .unwrap_or(usize::MAX);

    Some(Task::from_persisted(PersistedTaskData {
        id,
        title,
        description: record.description.unwrap_or_default(),
        created_at: record.created_at.unwrap_or(loaded_at),
        column,
        order,
        is_new: record.is_new.unwrap_or(false),
        storage_key,
    }))
}

/// Reads and writes board snapshots under one key.
#[derive(Debug, Clone)]
pub struct PersistenceBridge<B>
where
    B: BlobStore,
{
    store: Arc<B>,
    key: String,
}

impl<B> PersistenceBridge<B>
where
    B: BlobStore,
{
    /// Creates a bridge writing under `key`.
    #[must_use]
    pub fn new(store: Arc<B>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Returns the snapshot key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored board, falling back to an empty one on any failure.
    ///
    /// Orders are returned as stored; the task store re-ranks on adoption.
    #[must_use]
    pub fn load(&self, clock: &impl Clock) -> BoardState {
        match self.try_load(clock) {
            Ok(state) => {
                debug!(key = %self.key, tasks = state.len(), "board snapshot loaded");
                state
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "starting with an empty board");
                BoardState::new()
            }
        }
    }

    /// Writes the board, logging and swallowing any failure.
    ///
    /// Returns whether the write succeeded.
    #[must_use]
    pub fn save(&self, state: &BoardState) -> bool {
        match self.try_save(state) {
            Ok(()) => true,
            Err(err) => {
                warn!(key = %self.key, error = %err, "board snapshot not persisted");
                false
            }
        }
    }

    fn try_load(&self, clock: &impl Clock) -> Result<BoardState, PersistenceError> {
        match self.store.read(&self.key)? {
            Some(raw) => decode(&raw, clock),
            None => Ok(BoardState::new()),
        }
    }

    fn try_save(&self, state: &BoardState) -> Result<(), PersistenceError> {
        let raw = encode(state)?;
        self.store.write(&self.key, &raw)?;
        Ok(())
    }
}
