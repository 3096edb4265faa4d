//! In-memory integration tests for board snapshots.

use super::helpers::{blobs, ensure_dense, notifier, open_board, titles};
use kanban::board::{
    adapters::memory::{InMemoryBlobStore, RecordingNotifier},
    domain::{Column, TaskId},
    services::BoardService,
};
use kanban::config::{BoardConfig, DEFAULT_STORAGE_KEY};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

fn stored_json(blobs: &InMemoryBlobStore, key: &str) -> Result<serde_json::Value, eyre::Report> {
    let raw = blobs
        .snapshot(key)
        .ok_or_else(|| eyre::eyre!("nothing stored under {key}"))?;
    Ok(serde_json::from_str(&raw)?)
}

#[rstest]
fn snapshot_is_keyed_by_task_id(
    blobs: Arc<InMemoryBlobStore>,
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let mut board = open_board(&blobs, &notifier);
    let id = board.add_task("Write report", "quarterly")?;
    board.move_task(id, Column::InProgress, None);

    let snapshot = stored_json(&blobs, DEFAULT_STORAGE_KEY)?;
    let record = snapshot
        .get(id.to_string())
        .ok_or_else(|| eyre::eyre!("record missing for {id}"))?;

    eyre::ensure!(record["title"] == "Write report", "title: {record}");
    eyre::ensure!(record["description"] == "quarterly", "description: {record}");
    eyre::ensure!(record["column"] == "inprogress", "column: {record}");
    eyre::ensure!(record["order"] == 0, "order: {record}");
    eyre::ensure!(record["isNew"] == true, "isNew: {record}");
    eyre::ensure!(record["createdAt"].is_string(), "createdAt: {record}");
    Ok(())
}

#[rstest]
fn custom_storage_key_is_used(blobs: Arc<InMemoryBlobStore>) -> Result<(), eyre::Report> {
    let mut board = BoardService::open(
        Arc::clone(&blobs),
        Arc::new(RecordingNotifier::new()),
        Arc::new(DefaultClock),
        BoardConfig::default().with_storage_key("team.board"),
    );
    board.add_task("Plan sprint", "")?;

    eyre::ensure!(blobs.snapshot(DEFAULT_STORAGE_KEY).is_none(), "default key written");
    stored_json(&blobs, "team.board")?;
    Ok(())
}

#[rstest]
fn legacy_snapshot_is_adopted_and_densified(
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let ordered = TaskId::new();
    let legacy = TaskId::new();
    let done = TaskId::new();
    let raw = format!(
        r#"{{
            "{legacy}": {{"title": "Legacy", "description": "no order", "createdAt": "2023-05-01T10:00:00Z"}},
            "{ordered}": {{"title": "Ordered", "column": "todo", "order": 12, "createdAt": "2024-05-01T10:00:00Z"}},
            "{done}": {{"title": "Shipped", "column": "done", "order": 3, "isNew": false}}
        }}"#
    );
    let blobs = Arc::new(InMemoryBlobStore::seeded(DEFAULT_STORAGE_KEY, raw));

    let board = open_board(&blobs, &notifier);

    eyre::ensure!(
        titles(&board, Column::Todo) == ["Ordered", "Legacy"],
        "unexpected todo column: {:?}",
        titles(&board, Column::Todo)
    );
    eyre::ensure!(titles(&board, Column::Done) == ["Shipped"], "done column");
    ensure_dense(&board)
}

#[rstest]
fn timestamp_keyed_board_is_adopted_and_kept(
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let raw = r#"{
        "1700000000000": {"title": "A", "description": "", "createdAt": "2023-11-14T22:13:20Z", "column": "todo", "isNew": false},
        "1700000000001": {"title": "B", "description": "", "createdAt": "2023-11-14T22:13:20Z", "column": "done", "order": 0, "isNew": false}
    }"#;
    let blobs = Arc::new(InMemoryBlobStore::seeded(DEFAULT_STORAGE_KEY, raw));

    let mut board = open_board(&blobs, &notifier);
    eyre::ensure!(board.state().len() == 2, "stored tasks were dropped");
    eyre::ensure!(titles(&board, Column::Todo) == ["A"], "todo column");
    eyre::ensure!(titles(&board, Column::Done) == ["B"], "done column");

    let a: TaskId = "1700000000000".parse()?;
    board.move_task(a, Column::InProgress, None);
    board.add_task("C", "")?;

    let snapshot = stored_json(&blobs, DEFAULT_STORAGE_KEY)?;
    let records = snapshot
        .as_object()
        .ok_or_else(|| eyre::eyre!("snapshot is not an object"))?;
    eyre::ensure!(records.len() == 3, "unexpected record count");
    eyre::ensure!(
        records
            .get("1700000000000")
            .is_some_and(|record| record["column"] == "inprogress"),
        "moved task lost its stored key: {snapshot}"
    );
    eyre::ensure!(
        records.contains_key("1700000000001"),
        "untouched task lost its stored key: {snapshot}"
    );
    ensure_dense(&board)
}

#[rstest]
#[case("")]
#[case("null")]
#[case("{\"truncated\":")]
#[case("[]")]
fn unreadable_snapshot_starts_empty(
    notifier: Arc<RecordingNotifier>,
    #[case] raw: &str,
) -> Result<(), eyre::Report> {
    let blobs = Arc::new(InMemoryBlobStore::seeded(DEFAULT_STORAGE_KEY, raw));

    let mut board = open_board(&blobs, &notifier);
    eyre::ensure!(board.state().is_empty(), "board should start empty");

    board.add_task("Fresh start", "")?;
    let snapshot = stored_json(&blobs, DEFAULT_STORAGE_KEY)?;
    eyre::ensure!(
        snapshot.as_object().is_some_and(|records| records.len() == 1),
        "corrupt snapshot not replaced"
    );
    Ok(())
}

#[rstest]
fn quota_failures_keep_the_session_running(
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let blobs = Arc::new(InMemoryBlobStore::with_quota(16));
    let mut board = open_board(&blobs, &notifier);

    let a = board.add_task("Too big to store", "")?;
    board.add_task("Still works", "")?;
    board.move_task(a, Column::Done, Some(0));

    eyre::ensure!(board.state().len() == 2, "in-memory board lost tasks");
    eyre::ensure!(blobs.write_count() == 0, "no write should fit the quota");
    eyre::ensure!(
        open_board(&blobs, &notifier).state().is_empty(),
        "nothing should have been persisted"
    );
    Ok(())
}

#[rstest]
fn reload_restores_columns_and_orders(
    blobs: Arc<InMemoryBlobStore>,
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let mut board = open_board(&blobs, &notifier);
    let a = board.add_task("A", "")?;
    let b = board.add_task("B", "")?;
    board.add_task("C", "")?;
    board.move_task(b, Column::Done, None);
    board.move_task(a, Column::Done, Some(0));

    let reloaded = open_board(&blobs, &notifier);

    eyre::ensure!(reloaded.state() == board.state(), "reloaded board differs");
    eyre::ensure!(titles(&reloaded, Column::Done) == ["A", "B"], "done column");
    Ok(())
}
