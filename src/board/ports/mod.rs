//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod blob_store;
pub mod notifier;

pub use blob_store::{BlobStore, BlobStoreError, BlobStoreResult};
pub use notifier::{Notice, Notifier};
