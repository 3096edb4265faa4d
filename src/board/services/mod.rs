//! Application services for the task board.

mod board;
pub mod dialogs;
pub mod gesture;
mod highlight;
pub mod moves;
pub mod persistence;
mod store;

pub use board::{BoardError, BoardResult, BoardService};
pub use dialogs::{
    DialogError, DialogKind, DialogOutcome, DialogRegistry, DialogRequest, DialogResponse,
    EditedFields,
};
pub use gesture::{DropIntent, DropTarget, GestureTracker, PointerId};
pub use highlight::HighlightSchedule;
pub use moves::{MovePlan, MoveRequest};
pub use persistence::{PersistenceBridge, PersistenceError};
pub use store::{TaskStore, TaskStoreError};
