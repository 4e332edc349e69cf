//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `sqlite/` - `TodoStore` backed by a rusqlite connection

pub mod sqlite;
