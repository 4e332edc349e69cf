//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the record access rules and the
//! persistence layer. Implementations live in the `adapters` module.
//!
//! The service receives its store explicitly, so tests can hand it an
//! isolated in-memory database or a mock.

mod todo_store;

pub use todo_store::{StoreError, StoreResult, TodoFilter, TodoStore};
