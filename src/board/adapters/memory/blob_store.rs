//! In-memory blob store for tests and embedded hosts.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{BlobStore, BlobStoreError, BlobStoreResult};

/// Thread-safe in-memory blob store with an optional size quota.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    state: Arc<RwLock<InMemoryBlobState>>,
}

#[derive(Debug, Default)]
struct InMemoryBlobState {
    blobs: HashMap<String, String>,
    quota: Option<usize>,
    writes: usize,
}

impl InMemoryBlobStore {
    /// Creates an empty store without a quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store rejecting values larger than `limit` bytes.
    #[must_use]
    pub fn with_quota(limit: usize) -> Self {
        let store = Self::default();
        if let Ok(mut state) = store.state.write() {
            state.quota = Some(limit);
        }
        store
    }

    /// Creates a store pre-populated with `value` under `key`.
    #[must_use]
    pub fn seeded(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        if let Ok(mut state) = store.state.write() {
            state.blobs.insert(key.into(), value.into());
        }
        store
    }

    /// Returns the value stored under `key` without going through the port.
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.blobs.get(key).cloned())
    }

    /// Returns the number of successful writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.state.read().map_or(0, |state| state.writes)
    }
}

impl BlobStore for InMemoryBlobStore {
    fn read(&self, key: &str) -> BlobStoreResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| BlobStoreError::io(std::io::Error::other(err.to_string())))?;
        Ok(state.blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> BlobStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BlobStoreError::io(std::io::Error::other(err.to_string())))?;
        if let Some(limit) = state.quota
            && value.len() > limit
        {
            return Err(BlobStoreError::QuotaExceeded {
                limit,
                attempted: value.len(),
            });
        }
        state.blobs.insert(key.to_owned(), value.to_owned());
        state.writes += 1;
        Ok(())
    }
}
