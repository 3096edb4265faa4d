//! Two-step delete and edit flows.
//!
//! Opening a flow issues a [`DialogRequest`] carrying a single-use
//! [`FlowToken`]. The presentation layer shows the dialog and later hands the
//! user's answer back with that token. Nothing on the board changes between
//! the request and its resolution.

use std::collections::HashMap;
use thiserror::Error;

use crate::board::domain::{FlowToken, TaskId};

/// Which dialog a pending flow is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Confirm-before-delete.
    ConfirmDelete,
    /// Edit title and description.
    Edit,
}

/// A dialog the presentation layer must show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogRequest {
    /// Ask the user to confirm deleting a task.
    ConfirmDelete {
        /// Token to resolve the flow with.
        token: FlowToken,
        /// Task to delete.
        task_id: TaskId,
        /// Title shown in the confirmation message.
        title: String,
    },
    /// Ask the user to edit a task.
    Edit {
        /// Token to resolve the flow with.
        token: FlowToken,
        /// Task to edit.
        task_id: TaskId,
        /// Current title, used to pre-fill the form.
        title: String,
        /// Current description, used to pre-fill the form.
        description: String,
    },
}

impl DialogRequest {
    /// Returns the flow token.
    #[must_use]
    pub const fn token(&self) -> FlowToken {
        match self {
            Self::ConfirmDelete { token, .. } | Self::Edit { token, .. } => *token,
        }
    }

    /// Returns the task the dialog is about.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        match self {
            Self::ConfirmDelete { task_id, .. } | Self::Edit { task_id, .. } => *task_id,
        }
    }

    /// Returns the kind of dialog.
    #[must_use]
    pub const fn kind(&self) -> DialogKind {
        match self {
            Self::ConfirmDelete { .. } => DialogKind::ConfirmDelete,
            Self::Edit { .. } => DialogKind::Edit,
        }
    }
}

/// Fields submitted from the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedFields {
    /// Submitted title.
    pub title: String,
    /// Submitted description.
    pub description: String,
}

impl EditedFields {
    /// Creates submitted edit fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The user's answer to a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResponse {
    /// Answer to a confirmation dialog.
    Confirm(bool),
    /// Answer to an edit dialog; `None` when cancelled.
    Edit(Option<EditedFields>),
}

impl DialogResponse {
    const fn kind(&self) -> DialogKind {
        match self {
            Self::Confirm(_) => DialogKind::ConfirmDelete,
            Self::Edit(_) => DialogKind::Edit,
        }
    }
}

/// What resolving a dialog did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The task was deleted.
    Deleted(TaskId),
    /// The task was updated.
    Edited(TaskId),
    /// The user declined or cancelled; nothing changed.
    Dismissed,
}

/// Errors returned when resolving a dialog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DialogError {
    /// No pending flow holds the token, or it was already used.
    #[error("no pending dialog for token {0}")]
    UnknownToken(FlowToken),

    /// The response does not answer the pending dialog.
    #[error("dialog {token} expects a {expected:?} response, got {received:?}")]
    ResponseMismatch {
        /// Token of the discarded flow.
        token: FlowToken,
        /// Kind the flow was waiting on.
        expected: DialogKind,
        /// Kind of the submitted response.
        received: DialogKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingFlow {
    pub(crate) task_id: TaskId,
    pub(crate) kind: DialogKind,
}

/// Pending dialog flows keyed by token.
#[derive(Debug, Clone, Default)]
pub struct DialogRegistry {
    pending: HashMap<FlowToken, PendingFlow>,
}

impl DialogRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a flow for `task_id` and returns its token.
    pub fn open(&mut self, task_id: TaskId, kind: DialogKind) -> FlowToken {
        let token = FlowToken::new();
        self.pending.insert(token, PendingFlow { task_id, kind });
        token
    }

    /// Consumes the flow for `token`, checking it matches `response`.
    ///
    /// The flow is discarded even when the response kind mismatches.
    pub(crate) fn take(
        &mut self,
        token: FlowToken,
        response: &DialogResponse,
    ) -> Result<PendingFlow, DialogError> {
        let flow = self
            .pending
            .remove(&token)
            .ok_or(DialogError::UnknownToken(token))?;
        if flow.kind != response.kind() {
            return Err(DialogError::ResponseMismatch {
                token,
                expected: flow.kind,
                received: response.kind(),
            });
        }
        Ok(flow)
    }

    /// Discards every flow targeting `task_id`, returning how many were open.
    pub fn discard_for(&mut self, task_id: TaskId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, flow| flow.task_id != task_id);
        before - self.pending.len()
    }

    /// Returns `true` when `token` is still pending.
    #[must_use]
    pub fn is_pending(&self, token: FlowToken) -> bool {
        self.pending.contains_key(&token)
    }

    /// Returns the number of pending flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` when no flow is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
