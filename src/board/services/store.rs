//! Task store: the sole owner and mutator of board state.

use mockable::Clock;
use thiserror::Error;
use tracing::debug;

use super::moves::MovePlan;
use crate::board::domain::{
    BoardDomainError, BoardState, Column, Task, TaskDraft, TaskId, TaskPatch, ordering,
};

/// Errors returned when adding a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// A task with the same title and description already exists.
    #[error("duplicate task: matches existing task {existing}")]
    Duplicate {
        /// The task holding the same content.
        existing: TaskId,
    },
}

/// In-memory task store.
///
/// Every public mutation leaves each column densely ranked.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    state: BoardState,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts `state`, re-ranking every column so orders are dense.
    #[must_use]
    pub fn from_state(mut state: BoardState) -> Self {
        ordering::rerank_all(&mut state);
        Self { state }
    }

    /// Returns the board state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.state.get(id)
    }

    /// Returns the tasks of `column` in display order.
    #[must_use]
    pub fn list(&self, column: Column) -> Vec<&Task> {
        ordering::ordered_tasks(&self.state, column)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns `true` when the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Finds a task, in any column, with the same trimmed and case-folded
    /// title and description.
    #[must_use]
    pub fn find_duplicate(&self, title: &str, description: &str) -> Option<TaskId> {
        self.state
            .iter()
            .filter(|task| task.has_same_content(title, description))
            .map(Task::id)
            .min()
    }

    /// Adds a task to the end of the `todo` column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the title is blank, or
    /// [`TaskStoreError::Duplicate`] when a task with the same content exists.
    /// The store is unchanged in both cases.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        clock: &impl Clock,
    ) -> Result<TaskId, TaskStoreError> {
        let draft = TaskDraft::new(title, description)?;
        if let Some(existing) = self.find_duplicate(draft.title(), draft.description()) {
            return Err(TaskStoreError::Duplicate { existing });
        }

        let order = ordering::next_order(&self.state, Column::Todo);
        let task = Task::new(draft, order, clock);
        let id = task.id();
        self.state.insert(task);
        Ok(id)
    }

    /// Merges `patch` into the task, returning whether it changed.
    ///
    /// Unknown identifiers are ignored.
    pub fn update(&mut self, id: TaskId, patch: &TaskPatch) -> bool {
        let Some(task) = self.state.get_mut(id) else {
            debug!(task_id = %id, "update ignored: task not found");
            return false;
        };
        task.apply_patch(patch)
    }

    /// Removes the task and re-ranks the column it vacated.
    ///
    /// Returns the removed task, or `None` for unknown identifiers.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(removed) = self.state.remove(id) else {
            debug!(task_id = %id, "delete ignored: task not found");
            return None;
        };
        ordering::rerank(&mut self.state, removed.column());
        Some(removed)
    }

    /// Applies a resolved move.
    ///
    /// The moved task takes its destination column and every task in the
    /// destination sequence receives `order = position`. The source column is
    /// re-ranked when it differs from the destination. Plans naming a task
    /// that is no longer on the board are ignored.
    ///
    /// A plan may be stale: sequence members that have since left the
    /// destination are skipped, and the column the task actually leaves is
    /// the one re-ranked.
    pub fn apply_move(&mut self, plan: &MovePlan) -> bool {
        let destination = plan.destination();
        let Some(task) = self.state.get_mut(plan.task_id()) else {
            debug!(task_id = %plan.task_id(), "move ignored: task not found");
            return false;
        };
        let source = task.column();
        task.set_column(destination);

        let members: Vec<TaskId> = plan
            .destination_sequence()
            .iter()
            .copied()
            .filter(|id| {
                self.state
                    .get(*id)
                    .is_some_and(|member| member.column() == destination)
            })
            .collect();
        ordering::assign_sequence(&mut self.state, &members);
        ordering::rerank(&mut self.state, destination);
        if source != destination {
            ordering::rerank(&mut self.state, source);
        }
        true
    }
}
