//! Deadlines for clearing the is-new flag of freshly added tasks.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::board::domain::TaskId;

/// Pending is-new expiries, at most one per task.
#[derive(Debug, Clone, Default)]
pub struct HighlightSchedule {
    deadlines: HashMap<TaskId, DateTime<Utc>>,
}

impl HighlightSchedule {
    /// Creates an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the expiry of `id` at `deadline`, replacing any earlier one.
    pub fn schedule(&mut self, id: TaskId, deadline: DateTime<Utc>) {
        self.deadlines.insert(id, deadline);
    }

    /// Cancels the pending expiry of `id`, returning whether one existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.deadlines.remove(&id).is_some()
    }

    /// Returns `true` when `id` has a pending expiry.
    #[must_use]
    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.deadlines.values().min().copied()
    }

    /// Removes and returns every expiry due at `now`, earliest first.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<TaskId> {
        let mut due: Vec<(DateTime<Utc>, TaskId)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort_unstable();
        for (_, id) in &due {
            self.deadlines.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Returns the number of pending expiries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    /// Returns `true` when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
