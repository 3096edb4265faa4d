//! Kanban: task ordering and movement engine for a three-column board.
//!
//! This crate keeps tasks in `todo`, `inprogress`, and `done`, maintains a
//! dense per-column ordering through adds, deletes, and drag-and-drop moves,
//! and persists the whole board as a single snapshot after every mutation.
//!
//! # Architecture
//!
//! The board follows hexagonal architecture principles:
//!
//! - **Domain**: Tasks, columns, and the ordering engine
//! - **Ports**: Abstract trait interfaces for storage and notices
//! - **Adapters**: In-memory, filesystem, and tracing implementations
//! - **Services**: Task store, move resolver, persistence, and dialog flows
//!
//! # Modules
//!
//! - [`board`]: The task board and its services
//! - [`config`]: Runtime settings read from the environment
//! - [`telemetry`]: Tracing subscriber bootstrap

pub mod board;
pub mod config;
pub mod telemetry;
