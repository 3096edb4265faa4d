//! In-memory integration tests for column ordering.

use super::helpers::{blobs, ensure_dense, notifier, open_board, titles};
use kanban::board::{
    adapters::memory::{InMemoryBlobStore, RecordingNotifier},
    domain::{Column, TaskId, TaskPatch},
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn end_to_end_add_move_delete(
    blobs: Arc<InMemoryBlobStore>,
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let mut board = open_board(&blobs, &notifier);
    let a = board.add_task("A", "")?;
    let b = board.add_task("B", "")?;

    board.move_task(a, Column::InProgress, Some(0));
    board.delete_task(b);

    eyre::ensure!(titles(&board, Column::Todo).is_empty(), "todo not empty");
    eyre::ensure!(
        titles(&board, Column::InProgress) == ["A"],
        "unexpected inprogress column"
    );
    eyre::ensure!(
        board.task(a).map(|task| task.order()) == Some(0),
        "A not at order 0"
    );
    ensure_dense(&board)
}

#[rstest]
fn mixed_operations_keep_every_column_dense(
    blobs: Arc<InMemoryBlobStore>,
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let mut board = open_board(&blobs, &notifier);
    let mut ids: Vec<TaskId> = Vec::new();
    for title in ["one", "two", "three", "four", "five", "six"] {
        ids.push(board.add_task(title, "")?);
    }

    let plan: [(usize, Column, Option<usize>); 8] = [
        (0, Column::Done, None),
        (3, Column::Done, Some(0)),
        (5, Column::InProgress, Some(9)),
        (1, Column::InProgress, Some(0)),
        (3, Column::Todo, Some(1)),
        (0, Column::Done, Some(0)),
        (2, Column::InProgress, Some(1)),
        (4, Column::Todo, None),
    ];
    for (step, (which, column, index)) in plan.into_iter().enumerate() {
        let id = *ids
            .get(which)
            .ok_or_else(|| eyre::eyre!("no task at {which}"))?;
        board.move_task(id, column, index);
        ensure_dense(&board).map_err(|err| err.wrap_err(format!("after move {step}")))?;
    }

    board.delete_task(ids.first().copied().ok_or_else(|| eyre::eyre!("empty"))?);
    board.update_task(
        ids.get(1).copied().ok_or_else(|| eyre::eyre!("short"))?,
        &TaskPatch::new().with_title("two, renamed"),
    );
    board.add_task("seven", "")?;
    ensure_dense(&board)?;
    eyre::ensure!(board.state().len() == 6, "unexpected task count");
    Ok(())
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn moving_to_current_position_is_idempotent(
    blobs: Arc<InMemoryBlobStore>,
    notifier: Arc<RecordingNotifier>,
    #[case] position: usize,
) -> Result<(), eyre::Report> {
    let mut board = open_board(&blobs, &notifier);
    let ids = [
        board.add_task("A", "")?,
        board.add_task("B", "")?,
        board.add_task("C", "")?,
    ];
    let before = board.state().clone();
    let id = *ids
        .get(position)
        .ok_or_else(|| eyre::eyre!("no task at {position}"))?;

    board.move_task(id, Column::Todo, Some(position));

    eyre::ensure!(board.state() == &before, "orders changed");
    Ok(())
}

#[rstest]
fn deleting_from_the_middle_closes_the_gap(
    blobs: Arc<InMemoryBlobStore>,
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let mut board = open_board(&blobs, &notifier);
    let mut ids = Vec::new();
    for title in ["A", "B", "C", "D"] {
        let id = board.add_task(title, "")?;
        board.move_task(id, Column::Done, None);
        ids.push(id);
    }

    board.delete_task(ids.get(1).copied().ok_or_else(|| eyre::eyre!("short"))?);

    eyre::ensure!(
        titles(&board, Column::Done) == ["A", "C", "D"],
        "unexpected done column"
    );
    ensure_dense(&board)
}
