//! Blob store port: a key-value store holding serialized board snapshots.

use std::sync::Arc;
use thiserror::Error;

/// Result type for blob store operations.
pub type BlobStoreResult<T> = Result<T, BlobStoreError>;

/// Key-value storage for whole-board snapshots.
///
/// Implementations are synchronous; the board writes after every mutation
/// and expects the call to complete before the next user event.
pub trait BlobStore: Send + Sync {
    /// Reads the blob stored under `key`.
    ///
    /// Returns `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError`] when the backing store cannot be read.
    fn read(&self, key: &str) -> BlobStoreResult<Option<String>>;

    /// Replaces the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::QuotaExceeded`] when the value does not fit,
    /// or another [`BlobStoreError`] when the backing store rejects the write.
    fn write(&self, key: &str, value: &str) -> BlobStoreResult<()>;
}

/// Errors returned by blob store implementations.
#[derive(Debug, Clone, Error)]
pub enum BlobStoreError {
    /// The value exceeds the storage quota.
    #[error("storage quota of {limit} bytes exceeded by {attempted} byte value")]
    QuotaExceeded {
        /// Configured quota in bytes.
        limit: usize,
        /// Size of the rejected value in bytes.
        attempted: usize,
    },

    /// The key cannot be mapped onto the backing store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Backing-store failure.
    #[error("storage error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl BlobStoreError {
    /// Wraps a backing-store error.
    #[must_use]
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
