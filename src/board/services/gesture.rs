//! Gesture-local drag state.
//!
//! A drag lives from `begin` until `end` or `cancel`. Only the resolved drop
//! target is tracked here; translating pointer coordinates into a column and
//! index is the presentation layer's job.

use crate::board::domain::{Column, TaskId};

/// Identifier of the pointer or touch point driving a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Resolved hover position of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    /// Column under the pointer.
    pub column: Column,
    /// Insertion index within that column, if one was resolved.
    pub index: Option<usize>,
}

impl DropTarget {
    /// Creates a target appending to `column`.
    #[must_use]
    pub const fn column(column: Column) -> Self {
        Self {
            column,
            index: None,
        }
    }

    /// Creates a target inserting at `index` in `column`.
    #[must_use]
    pub const fn at(column: Column, index: usize) -> Self {
        Self {
            column,
            index: Some(index),
        }
    }
}

/// A completed drag, ready to be applied as a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropIntent {
    /// Dragged task.
    pub task_id: TaskId,
    /// Where it was dropped.
    pub target: DropTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveDrag {
    task_id: TaskId,
    pointer: PointerId,
    hover: Option<DropTarget>,
}

/// Tracks at most one drag at a time.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    active: Option<ActiveDrag>,
}

impl GestureTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging `task_id` with `pointer`, abandoning any earlier drag.
    pub fn begin(&mut self, task_id: TaskId, pointer: PointerId) {
        self.active = Some(ActiveDrag {
            task_id,
            pointer,
            hover: None,
        });
    }

    /// Records the current hover target; ignored for other pointers.
    pub fn hover(&mut self, pointer: PointerId, target: DropTarget) {
        if let Some(drag) = self.active.as_mut()
            && drag.pointer == pointer
        {
            drag.hover = Some(target);
        }
    }

    /// Ends the drag driven by `pointer`.
    ///
    /// Returns a drop intent when a hover target was recorded. Events from
    /// other pointers leave the drag running and return `None`.
    pub fn end(&mut self, pointer: PointerId) -> Option<DropIntent> {
        if self.active.is_none_or(|drag| drag.pointer != pointer) {
            return None;
        }
        let drag = self.active.take()?;
        drag.hover.map(|target| DropIntent {
            task_id: drag.task_id,
            target,
        })
    }

    /// Abandons the current drag without producing an intent.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Returns the task being dragged.
    #[must_use]
    pub fn dragging(&self) -> Option<TaskId> {
        self.active.map(|drag| drag.task_id)
    }

    /// Returns the current hover target.
    #[must_use]
    pub fn hover_target(&self) -> Option<DropTarget> {
        self.active.and_then(|drag| drag.hover)
    }
}
