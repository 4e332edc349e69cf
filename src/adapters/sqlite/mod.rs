//! SQLite persistence for to-do items
//!
//! - `open` - file and in-memory connections, migrated before use
//! - `migrations` - schema scripts tracked with `PRAGMA user_version`
//! - `todo_store` - `TodoStore` over the `todo` table

pub mod migrations;
mod open;
mod todo_store;

pub use open::{MEMORY_PATH, open_db, open_db_at, open_db_in_memory};
pub use todo_store::SqliteTodoStore;
