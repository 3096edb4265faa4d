//! Unit tests for the board module.
//!
//! Tests are organised by component: domain values, the ordering engine, the
//! task store, move resolution, persistence, and the board service flows.
