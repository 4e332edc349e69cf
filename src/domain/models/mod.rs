//! Data models for todobox
//!
//! Core abstractions:
//! - `ToDoItem`: a persisted to-do record
//! - `NewTodo`: the fields supplied when creating a record
//! - `TodoPatch`: the optional fields supplied when updating a record
//! - Outcomes: the result words reported by `update` and `delete`

mod outcome;
pub mod todo;

pub use outcome::{DeleteOutcome, UpdateOutcome};
pub use todo::{
    LABEL_MAX_CHARS, NewTodo, TEXT_MAX_CHARS, ToDoItem, TodoId, TodoPatch, ValidationError,
};
