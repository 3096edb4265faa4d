//! In-memory adapters for board ports.

mod blob_store;
mod notifier;

pub use blob_store::InMemoryBlobStore;
pub use notifier::RecordingNotifier;
