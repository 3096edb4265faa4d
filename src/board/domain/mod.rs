//! Domain model for the task board.
//!
//! Tasks, columns, and the board state live here together with the ordering
//! engine that keeps every column densely ranked. Nothing in this module
//! touches storage or presentation.

mod board;
mod column;
mod error;
mod ids;
pub mod ordering;
mod task;

pub use board::BoardState;
pub use column::Column;
pub use error::{BoardDomainError, ParseColumnError};
pub use ids::{FlowToken, ParseTaskIdError, TaskId};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch};
