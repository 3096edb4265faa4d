//! Adapter implementations for board ports.

pub mod fs;
pub mod memory;

mod tracing_notifier;

pub use tracing_notifier::TracingNotifier;
