//! Command implementations

mod greet;
mod serve;
mod todo;

use std::path::Path;

use anyhow::Context;
use rusqlite::Connection;

use todobox::adapters::sqlite::open_db_at;

pub use greet::{add_numbers, hello};
pub use serve::serve;
pub use todo::{add, all, by_assignee, by_category, delete, get, update};

/// Open and migrate the database every command works against
fn open_store(db_path: &Path) -> anyhow::Result<Connection> {
    open_db_at(db_path).with_context(|| format!("failed to open database {}", db_path.display()))
}
