//! Board service: the intent interface used by the presentation layer.

use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::{
    dialogs::{
        DialogError, DialogKind, DialogOutcome, DialogRegistry, DialogRequest, DialogResponse,
        EditedFields,
    },
    gesture::DropIntent,
    highlight::HighlightSchedule,
    moves::{self, MoveRequest},
    persistence::PersistenceBridge,
    store::{TaskStore, TaskStoreError},
};
use crate::board::{
    domain::{BoardDomainError, BoardState, Column, FlowToken, Task, TaskId, TaskPatch},
    ports::{BlobStore, Notice, Notifier},
};
use crate::config::BoardConfig;

/// Errors surfaced to the presentation layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The title was blank.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A task with the same title and description already exists.
    #[error("task already exists: {existing}")]
    DuplicateTask {
        /// The task holding the same content.
        existing: TaskId,
    },

    /// A dialog could not be resolved.
    #[error(transparent)]
    Dialog(#[from] DialogError),
}

impl From<TaskStoreError> for BoardError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::Domain(BoardDomainError::EmptyTitle) => Self::EmptyTitle,
            TaskStoreError::Duplicate { existing } => Self::DuplicateTask { existing },
        }
    }
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Task board orchestration service.
///
/// Every mutation runs to completion: task store change, re-rank, snapshot
/// write, then any notice. Operations on unknown task ids are silent no-ops.
pub struct BoardService<B, N, C>
where
    B: BlobStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    store: TaskStore,
    persistence: PersistenceBridge<B>,
    notifier: Arc<N>,
    clock: Arc<C>,
    config: BoardConfig,
    highlights: HighlightSchedule,
    dialogs: DialogRegistry,
}

impl<B, N, C> BoardService<B, N, C>
where
    B: BlobStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Opens the board stored in `blob_store`.
    ///
    /// Unreadable snapshots yield an empty board. Tasks loaded with the is-new
    /// flag set get a fresh expiry.
    #[must_use]
    pub fn open(blob_store: Arc<B>, notifier: Arc<N>, clock: Arc<C>, config: BoardConfig) -> Self {
        let persistence = PersistenceBridge::new(blob_store, config.storage_key.clone());
        let store = TaskStore::from_state(persistence.load(&*clock));

        let mut service = Self {
            store,
            persistence,
            notifier,
            clock,
            config,
            highlights: HighlightSchedule::new(),
            dialogs: DialogRegistry::new(),
        };
        let highlighted: Vec<TaskId> = service
            .store
            .state()
            .iter()
            .filter(|task| task.is_new())
            .map(Task::id)
            .collect();
        for id in highlighted {
            service.schedule_highlight(id);
        }
        service
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the board state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        self.store.state()
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Returns the tasks of `column` in display order.
    #[must_use]
    pub fn tasks(&self, column: Column) -> Vec<&Task> {
        self.store.list(column)
    }

    /// Returns every column with its tasks in display order.
    #[must_use]
    pub fn columns(&self) -> Vec<(Column, Vec<&Task>)> {
        Column::ALL
            .into_iter()
            .map(|column| (column, self.store.list(column)))
            .collect()
    }

    /// Adds a task to the end of `todo`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTitle`] for a blank title and
    /// [`BoardError::DuplicateTask`] when a task with the same trimmed,
    /// case-insensitive title and description exists in any column. The
    /// board is unchanged on error.
    pub fn add_task(&mut self, title: &str, description: &str) -> BoardResult<TaskId> {
        match self.store.add(title, description, &*self.clock) {
            Ok(id) => {
                self.persist();
                self.schedule_highlight(id);
                self.notifier.notify(&Notice::TaskAdded(id));
                Ok(id)
            }
            Err(err) => {
                let notice = match &err {
                    TaskStoreError::Duplicate { existing } => Notice::DuplicateRejected {
                        existing: *existing,
                    },
                    TaskStoreError::Domain(_) => Notice::MissingTitle,
                };
                self.notifier.notify(&notice);
                Err(err.into())
            }
        }
    }

    /// Merges `patch` into the task.
    ///
    /// Content is not re-checked for duplicates. Setting the is-new flag
    /// schedules a fresh expiry; clearing it cancels the pending one. Unknown
    /// ids are ignored.
    pub fn update_task(&mut self, id: TaskId, patch: &TaskPatch) {
        if self.store.update(id, patch) {
            self.persist();
        }
        match patch.is_new() {
            Some(true) if self.store.get(id).is_some() => self.schedule_highlight(id),
            Some(false) => {
                self.highlights.cancel(id);
            }
            _ => {}
        }
    }

    /// Deletes the task, re-ranking the column it leaves.
    ///
    /// Cancels its pending highlight expiry and open dialogs. Unknown ids are
    /// ignored.
    pub fn delete_task(&mut self, id: TaskId) {
        if self.store.delete(id).is_none() {
            return;
        }
        self.highlights.cancel(id);
        let discarded = self.dialogs.discard_for(id);
        if discarded > 0 {
            debug!(task_id = %id, discarded, "discarded dialogs for deleted task");
        }
        self.persist();
    }

    /// Moves the task to `column`, inserting at `index` or appending.
    ///
    /// Unknown ids are ignored.
    pub fn move_task(&mut self, id: TaskId, column: Column, index: Option<usize>) {
        let request = match index {
            Some(position) => MoveRequest::new(id, column).at_index(position),
            None => MoveRequest::new(id, column),
        };
        self.apply_move(&request);
    }

    /// Applies a move request.
    pub fn apply_move(&mut self, request: &MoveRequest) {
        let Some(plan) = moves::resolve(self.store.state(), request) else {
            debug!(task_id = %request.task_id(), "move ignored: task not found");
            return;
        };
        if self.store.apply_move(&plan) {
            self.persist();
        }
    }

    /// Applies a completed drag.
    pub fn complete_drop(&mut self, intent: DropIntent) {
        self.move_task(intent.task_id, intent.target.column, intent.target.index);
    }

    /// Returns the earliest pending highlight expiry.
    #[must_use]
    pub fn next_highlight_deadline(&self) -> Option<DateTime<Utc>> {
        self.highlights.next_deadline()
    }

    /// Clears the is-new flag of every task whose highlight is due now.
    pub fn expire_highlights(&mut self) -> Vec<TaskId> {
        let now = self.clock.utc();
        self.expire_highlights_at(now)
    }

    /// Clears the is-new flag of every task whose highlight is due at `now`.
    ///
    /// Returns the tasks that were cleared.
    pub fn expire_highlights_at(&mut self, now: DateTime<Utc>) -> Vec<TaskId> {
        let due = self.highlights.take_due(now);
        let clear = TaskPatch::new().with_is_new(false);
        let mut changed = false;
        for id in &due {
            changed |= self.store.update(*id, &clear);
        }
        if changed {
            self.persist();
        }
        due
    }

    /// Opens a confirm-before-delete dialog for the task.
    ///
    /// Returns `None` for unknown ids.
    pub fn request_delete(&mut self, id: TaskId) -> Option<DialogRequest> {
        let title = self.store.get(id)?.title().to_owned();
        let token = self.dialogs.open(id, DialogKind::ConfirmDelete);
        Some(DialogRequest::ConfirmDelete {
            token,
            task_id: id,
            title,
        })
    }

    /// Opens an edit dialog pre-filled with the task's content.
    ///
    /// Returns `None` for unknown ids.
    pub fn request_edit(&mut self, id: TaskId) -> Option<DialogRequest> {
        let task = self.store.get(id)?;
        let title = task.title().to_owned();
        let description = task.description().to_owned();
        let token = self.dialogs.open(id, DialogKind::Edit);
        Some(DialogRequest::Edit {
            token,
            task_id: id,
            title,
            description,
        })
    }

    /// Resolves a pending dialog with the user's answer.
    ///
    /// A confirmed delete removes the task; a submitted edit with a non-blank
    /// title updates it. Declined or cancelled dialogs change nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Dialog`] when the token is unknown or already
    /// used, or when the response does not answer the pending dialog.
    pub fn resolve_dialog(
        &mut self,
        token: FlowToken,
        response: DialogResponse,
    ) -> BoardResult<DialogOutcome> {
        let flow = self.dialogs.take(token, &response)?;
        let outcome = match response {
            DialogResponse::Confirm(true) => self.confirmed_delete(flow.task_id),
            DialogResponse::Edit(Some(fields)) => self.submitted_edit(flow.task_id, &fields),
            DialogResponse::Confirm(false) | DialogResponse::Edit(None) => DialogOutcome::Dismissed,
        };
        Ok(outcome)
    }

    /// Returns the number of dialogs awaiting an answer.
    #[must_use]
    pub fn pending_dialogs(&self) -> usize {
        self.dialogs.len()
    }

    fn confirmed_delete(&mut self, id: TaskId) -> DialogOutcome {
        if self.store.get(id).is_none() {
            return DialogOutcome::Dismissed;
        }
        self.delete_task(id);
        self.notifier.notify(&Notice::TaskDeleted(id));
        DialogOutcome::Deleted(id)
    }

    fn submitted_edit(&mut self, id: TaskId, fields: &EditedFields) -> DialogOutcome {
        let title = fields.title.trim();
        if title.is_empty() || self.store.get(id).is_none() {
            return DialogOutcome::Dismissed;
        }
        let patch = TaskPatch::new()
            .with_title(title)
            .with_description(fields.description.clone());
        self.update_task(id, &patch);
        self.notifier.notify(&Notice::TaskEdited(id));
        DialogOutcome::Edited(id)
    }

    fn schedule_highlight(&mut self, id: TaskId) {
        let now = self.clock.utc();
        let deadline = now
            .checked_add_signed(self.config.highlight_duration)
            .unwrap_or(now);
        self.highlights.schedule(id, deadline);
    }

    fn persist(&self) {
        if !self.persistence.save(self.store.state()) {
            debug!(tasks = self.store.state().len(), "continuing with unsaved changes");
        }
    }
}
