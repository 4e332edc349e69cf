//! Domain logic for todobox
//!
//! This module contains the record access rules with no I/O dependencies.
//! Persistence is abstracted through the `TodoStore` port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ToDoItem`, `NewTodo`, `TodoPatch`, outcomes)
//! - `ports/` - Trait definitions for external dependencies
//! - `services/` - Operations exposed to every adapter
//! - `error` - The error taxonomy shared by all operations

mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{TodoError, TodoResult};
