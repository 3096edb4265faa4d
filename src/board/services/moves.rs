//! Move resolver: turns a drop into a destination sequence.

use crate::board::domain::{BoardState, Column, TaskId, ordering};

/// A request to place a task in a column at an optional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    task_id: TaskId,
    destination: Column,
    index: Option<usize>,
}

impl MoveRequest {
    /// Creates a request appending the task to `destination`.
    #[must_use]
    pub const fn new(task_id: TaskId, destination: Column) -> Self {
        Self {
            task_id,
            destination,
            index: None,
        }
    }

    /// Sets the insertion index.
    #[must_use]
    pub const fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Sets the insertion index from a signed value.
    ///
    /// Negative values fall back to appending.
    #[must_use]
    pub fn at_signed_index(mut self, index: i64) -> Self {
        self.index = usize::try_from(index).ok();
        self
    }

    /// Returns the task being moved.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the destination column.
    #[must_use]
    pub const fn destination(&self) -> Column {
        self.destination
    }

    /// Returns the requested insertion index.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }
}

/// The resolved outcome of a move, ready for the task store to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    task_id: TaskId,
    source: Column,
    destination: Column,
    destination_sequence: Vec<TaskId>,
}

impl MovePlan {
    /// Returns the moved task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the column the task leaves.
    #[must_use]
    pub const fn source(&self) -> Column {
        self.source
    }

    /// Returns the column the task enters.
    #[must_use]
    pub const fn destination(&self) -> Column {
        self.destination
    }

    /// Returns the final destination order, moved task included.
    #[must_use]
    pub fn destination_sequence(&self) -> &[TaskId] {
        &self.destination_sequence
    }

    /// Returns the position the moved task lands at.
    #[must_use]
    pub fn landing_index(&self) -> Option<usize> {
        self.destination_sequence
            .iter()
            .position(|id| *id == self.task_id)
    }
}

/// Resolves `request` against the current board.
///
/// Returns `None` when the task is unknown. An absent index, or one past the
/// end of the destination (after removing the moved task from it), appends.
#[must_use]
pub fn resolve(state: &BoardState, request: &MoveRequest) -> Option<MovePlan> {
    let task = state.get(request.task_id())?;
    let source = task.column();

    let mut sequence: Vec<TaskId> = ordering::ordered_ids(state, request.destination())
        .into_iter()
        .filter(|id| *id != request.task_id())
        .collect();
    let index = request
        .index()
        .filter(|index| *index <= sequence.len())
        .unwrap_or(sequence.len());
    sequence.insert(index, request.task_id());

    Some(MovePlan {
        task_id: request.task_id(),
        source,
        destination: request.destination(),
        destination_sequence: sequence,
    })
}
