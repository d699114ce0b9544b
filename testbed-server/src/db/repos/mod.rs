//! Repository implementations for database access
//!
//! Each operation is a single statement with bound parameters; not-found is
//! detected from the statement result, never via check-then-act.

pub mod projects;

pub use projects::{DbError, ProjectRepo};
