//! Notifier port for transient user-facing notices.

use crate::board::domain::TaskId;

/// A fire-and-forget notice raised by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A task was added to the board.
    TaskAdded(TaskId),
    /// An add was rejected because the task already exists.
    DuplicateRejected {
        /// The task that already holds the same title and description.
        existing: TaskId,
    },
    /// An add was rejected because the title was blank.
    MissingTitle,
    /// A task was edited through the edit dialog.
    TaskEdited(TaskId),
    /// A task was deleted after confirmation.
    TaskDeleted(TaskId),
}

impl Notice {
    /// Returns `true` for notices reporting a rejected request.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::DuplicateRejected { .. } | Self::MissingTitle)
    }
}

/// Presentation collaborator that displays notices.
///
/// The board never waits on or inspects the outcome of a notification.
pub trait Notifier: Send + Sync {
    /// Shows `notice` to the user.
    fn notify(&self, notice: &Notice);
}
