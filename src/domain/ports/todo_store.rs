//! To-do store port
//!
//! Defines the interface for persisting and retrieving to-do items.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::models::{NewTodo, ToDoItem, TodoId};

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The SQLite driver reported an error
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// The database was written by a newer schema than this binary knows
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        /// Version recorded in the database
        db_version: u32,
        /// Latest version this binary can migrate to
        latest_supported: u32,
    },

    /// The store could not be reached
    #[error("{0}")]
    Unavailable(String),
}

/// Row selection for list queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoFilter {
    /// Every record
    All,
    /// Records whose category equals the value exactly
    Category(String),
    /// Records whose assignee equals the value exactly
    Assignee(String),
}

/// Storage for to-do items
///
/// Every call is one atomic persistence action; callers get no transactions
/// spanning several calls.
pub trait TodoStore {
    /// Insert a new item and return the id the store assigned to it
    ///
    /// The item starts with `completed = false` and no `updated` timestamp.
    fn insert(&self, todo: &NewTodo, created: DateTime<Utc>) -> StoreResult<TodoId>;

    /// Fetch one item
    fn get(&self, id: TodoId) -> StoreResult<Option<ToDoItem>>;

    /// List items matching the filter, in the store's natural order
    fn list(&self, filter: &TodoFilter) -> StoreResult<Vec<ToDoItem>>;

    /// Overwrite the mutable fields of an existing item
    ///
    /// Returns false if no row has `item.id`.
    fn update(&self, item: &ToDoItem) -> StoreResult<bool>;

    /// Hard-delete an item
    ///
    /// Returns false if no row had that id.
    fn delete(&self, id: TodoId) -> StoreResult<bool>;
}
