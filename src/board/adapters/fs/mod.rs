//! Filesystem adapters for board ports.

mod blob_store;

pub use blob_store::FileBlobStore;
