//! Notifier that reports notices as `tracing` events.

use tracing::{info, warn};

use crate::board::ports::{Notice, Notifier};

/// Notifier for headless hosts: rejections are logged at `warn`, everything
/// else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates a tracing notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::TaskAdded(id) => info!(task_id = %id, "task added"),
            Notice::TaskEdited(id) => info!(task_id = %id, "task edited"),
            Notice::TaskDeleted(id) => info!(task_id = %id, "task deleted"),
            Notice::DuplicateRejected { existing } => {
                warn!(existing_task_id = %existing, "task already exists");
            }
            Notice::MissingTitle => warn!("task title is required"),
        }
    }
}
