//! Column ordering engine.
//!
//! Order values are dense, column-local, 0-based integers. Every structural
//! change (add, delete, move) ends with the affected columns satisfying
//! `{order} == {0, 1, …, n-1}`.

use super::{BoardState, Column, Task, TaskId};
use std::cmp::Ordering;

/// Returns the tasks of `column` sorted by order.
///
/// Ties are broken by creation timestamp, then identifier, so the result is
/// deterministic even when the stored orders are not dense.
#[must_use]
pub fn ordered_tasks(state: &BoardState, column: Column) -> Vec<&Task> {
    let mut tasks: Vec<&Task> = state.in_column(column).collect();
    tasks.sort_by(|left, right| rank_cmp(left, right));
    tasks
}

/// Returns the identifiers of `column` in display order.
#[must_use]
pub fn ordered_ids(state: &BoardState, column: Column) -> Vec<TaskId> {
    ordered_tasks(state, column)
        .into_iter()
        .map(Task::id)
        .collect()
}

/// Returns the order a task appended to `column` receives.
#[must_use]
pub fn next_order(state: &BoardState, column: Column) -> usize {
    state
        .in_column(column)
        .map(Task::order)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

/// Reassigns dense orders to every task in `column`, keeping relative order.
pub fn rerank(state: &mut BoardState, column: Column) {
    let sequence = ordered_ids(state, column);
    assign_sequence(state, &sequence);
}

/// Reassigns dense orders to every column.
pub fn rerank_all(state: &mut BoardState) {
    for column in Column::ALL {
        rerank(state, column);
    }
}

/// Assigns `order = position` to each task of `sequence`.
///
/// Identifiers missing from the board are skipped without consuming a
/// position.
pub fn assign_sequence(state: &mut BoardState, sequence: &[TaskId]) {
    let mut position = 0;
    for id in sequence {
        if let Some(task) = state.get_mut(*id) {
            task.set_order(position);
            position += 1;
        }
    }
}

/// Returns `true` when the orders of `column` are exactly `0..n`.
#[must_use]
pub fn is_dense(state: &BoardState, column: Column) -> bool {
    ordered_tasks(state, column)
        .iter()
        .enumerate()
        .all(|(position, task)| task.order() == position)
}

fn rank_cmp(left: &Task, right: &Task) -> Ordering {
    left.order()
        .cmp(&right.order())
        .then_with(|| left.created_at().cmp(&right.created_at()))
        .then_with(|| left.id().cmp(&right.id()))
}
