//! Shared world state for board BDD scenarios.

use std::sync::Arc;

use kanban::board::{
    adapters::memory::{InMemoryBlobStore, RecordingNotifier},
    domain::TaskId,
    services::{BoardResult, BoardService, DialogRequest},
};
use kanban::config::BoardConfig;
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoard = BoardService<InMemoryBlobStore, RecordingNotifier, DefaultClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub blobs: Arc<InMemoryBlobStore>,
    pub board: TestBoard,
    pub last_add: Option<BoardResult<TaskId>>,
    pub pending_dialog: Option<DialogRequest>,
}

impl BoardWorld {
    /// Creates a world around an empty blob store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_blobs(Arc::new(InMemoryBlobStore::new()))
    }

    /// Creates a world whose board is opened from `blobs`.
    #[must_use]
    pub fn with_blobs(blobs: Arc<InMemoryBlobStore>) -> Self {
        let board = open_board(&blobs);
        Self {
            blobs,
            board,
            last_add: None,
            pending_dialog: None,
        }
    }

    /// Reopens the board from the current blob store.
    pub fn reopen(&mut self) {
        self.board = open_board(&self.blobs);
    }

    /// Looks up a task by its title.
    ///
    /// # Errors
    ///
    /// Returns an error when no task carries `title`.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.board
            .state()
            .iter()
            .find(|task| task.title() == title)
            .map(kanban::board::domain::Task::id)
            .ok_or_else(|| eyre::eyre!("no task titled '{title}' on the board"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn open_board(blobs: &Arc<InMemoryBlobStore>) -> TestBoard {
    BoardService::open(
        Arc::clone(blobs),
        Arc::new(RecordingNotifier::new()),
        Arc::new(DefaultClock),
        BoardConfig::default(),
    )
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
