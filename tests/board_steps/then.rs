//! Then steps for board BDD scenarios.

use super::world::BoardWorld;
use kanban::board::domain::{Column, Task, ordering};
use kanban::board::services::{BoardError, persistence};
use kanban::config::DEFAULT_STORAGE_KEY;
use mockable::DefaultClock;
use rstest_bdd_macros::then;

fn column_titles(world: &BoardWorld, column: &str) -> Result<Vec<String>, eyre::Report> {
    let parsed: Column = column.parse()?;
    Ok(world
        .board
        .tasks(parsed)
        .into_iter()
        .map(|task| task.title().to_owned())
        .collect())
}

#[then(r#"column "{column}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let titles = column_titles(world, &column)?;
    if !titles.is_empty() {
        return Err(eyre::eyre!("expected {column} to be empty, found {titles:?}"));
    }
    Ok(())
}

#[then(r#"column "{column}" lists "{expected}""#)]
fn column_lists(world: &BoardWorld, column: String, expected: String) -> Result<(), eyre::Report> {
    let titles = column_titles(world, &column)?;
    let wanted: Vec<&str> = expected.split(',').map(str::trim).collect();
    if titles != wanted {
        return Err(eyre::eyre!("expected {column} to list {wanted:?}, found {titles:?}"));
    }
    Ok(())
}

#[then("every column is densely ordered")]
fn columns_dense(world: &BoardWorld) -> Result<(), eyre::Report> {
    for column in Column::ALL {
        if !ordering::is_dense(world.board.state(), column) {
            return Err(eyre::eyre!("{column} orders are not dense"));
        }
    }
    Ok(())
}

#[then("the board holds {count:usize} tasks")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board.state().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then("the stored board holds {count:usize} tasks")]
fn stored_board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let raw = world
        .blobs
        .snapshot(DEFAULT_STORAGE_KEY)
        .ok_or_else(|| eyre::eyre!("no snapshot was written"))?;
    let stored = persistence::decode(&raw, &DefaultClock)?;
    if stored.len() != count {
        return Err(eyre::eyre!(
            "expected {count} stored tasks, found {}",
            stored.len()
        ));
    }
    Ok(())
}

#[then("the add is rejected as a duplicate")]
fn add_rejected_as_duplicate(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no add was attempted"))?;
    if !matches!(result, Err(BoardError::DuplicateTask { .. })) {
        return Err(eyre::eyre!("expected a duplicate rejection, got {result:?}"));
    }
    Ok(())
}

#[then(r#""{title}" is highlighted as new"#)]
fn is_highlighted(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    if world.board.task(id).map(Task::is_new) != Some(true) {
        return Err(eyre::eyre!("expected '{title}' to be highlighted"));
    }
    Ok(())
}

#[then(r#""{title}" is no longer highlighted"#)]
fn is_not_highlighted(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    if world.board.task(id).map(Task::is_new) != Some(false) {
        return Err(eyre::eyre!("expected '{title}' to have lost its highlight"));
    }
    Ok(())
}
