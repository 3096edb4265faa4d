//! Task board with per-column ordering.
//!
//! Tasks live in three fixed columns (`todo`, `inprogress`, `done`). Each
//! column is kept densely ranked through adds, deletes, and drag-and-drop
//! moves, and the whole board is written to a blob store after every
//! mutation. The module follows hexagonal architecture:
//!
//! - Domain types and the ordering engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
