//! Given steps for board BDD scenarios.

use std::sync::Arc;

use super::world::BoardWorld;
use eyre::WrapErr;
use kanban::board::adapters::memory::InMemoryBlobStore;
use kanban::config::DEFAULT_STORAGE_KEY;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.board.state().is_empty() {
        return Err(eyre::eyre!("expected a fresh board"));
    }
    Ok(())
}

#[given(r#"a board with a task titled "{title}" described "{description}""#)]
fn board_with_task(
    world: &mut BoardWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    world
        .board
        .add_task(&title, &description)
        .wrap_err("seed task for scenario")?;
    Ok(())
}

#[given(r#"a stored snapshot containing "{raw}""#)]
fn stored_snapshot(world: &mut BoardWorld, raw: String) {
    *world = BoardWorld::with_blobs(Arc::new(InMemoryBlobStore::seeded(
        DEFAULT_STORAGE_KEY,
        raw,
    )));
}
