//! The full mapping from task identity to task.

use super::{Column, Task, TaskId};
use std::collections::HashMap;

/// Board state: every task on the board keyed by identifier.
///
/// Mutation is crate-private; the task store is the only owner that changes
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    tasks: HashMap<TaskId, Task>,
}

impl BoardState {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Returns `true` when the board holds the task.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Iterates over every task in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Iterates over the tasks of one column in unspecified order.
    pub fn in_column(&self, column: Column) -> impl Iterator<Item = &Task> {
        self.tasks.values().filter(move |task| task.column() == column)
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub(crate) fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(&id)
    }

    pub(crate) fn insert(&mut self, task: Task) {
        self.tasks.insert(task.id(), task);
    }

    pub(crate) fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.remove(&id)
    }
}

impl FromIterator<Task> for BoardState {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().map(|task| (task.id(), task)).collect(),
        }
    }
}
