//! SQLite to-do store
//!
//! Lists come back in ascending id order. Filters use SQLite's default
//! BINARY collation, so matches are exact and case-sensitive.

use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

use crate::domain::models::{NewTodo, ToDoItem, TodoId};
use crate::domain::ports::{StoreResult, TodoFilter, TodoStore};

const TODO_SELECT_SQL: &str = "SELECT
    id,
    text,
    assignee,
    category,
    completed,
    created,
    updated
FROM todo";

/// To-do store borrowing an open connection
#[derive(Debug, Clone, Copy)]
pub struct SqliteTodoStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoStore<'conn> {
    /// Wrap a connection returned by one of the `open_db*` functions
    #[must_use]
    pub const fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoStore for SqliteTodoStore<'_> {
    fn insert(&self, todo: &NewTodo, created: DateTime<Utc>) -> StoreResult<TodoId> {
        self.conn.execute(
            "INSERT INTO todo (text, assignee, category, completed, created)
             VALUES (?1, ?2, ?3, 0, ?4);",
            params![
                todo.text.as_str(),
                todo.assignee.as_deref(),
                todo.category.as_deref(),
                created,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get(&self, id: TodoId) -> StoreResult<Option<ToDoItem>> {
        let mut stmt = self.conn.prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;
        let todo = stmt.query_row(params![id], parse_todo_row).optional()?;
        Ok(todo)
    }

    fn list(&self, filter: &TodoFilter) -> StoreResult<Vec<ToDoItem>> {
        let mut sql = TODO_SELECT_SQL.to_string();
        let mut bind_values: Vec<Value> = Vec::new();

        match filter {
            TodoFilter::All => {},
            TodoFilter::Category(category) => {
                sql.push_str(" WHERE category = ?1");
                bind_values.push(Value::Text(category.clone()));
            },
            TodoFilter::Assignee(assignee) => {
                sql.push_str(" WHERE assignee = ?1");
                bind_values.push(Value::Text(assignee.clone()));
            },
        }
        sql.push_str(" ORDER BY id ASC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bind_values), parse_todo_row)?;
        let todos = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    fn update(&self, item: &ToDoItem) -> StoreResult<bool> {
        let changed = self.conn.execute(
            "UPDATE todo
             SET
                text = ?1,
                assignee = ?2,
                category = ?3,
                completed = ?4,
                updated = ?5
             WHERE id = ?6;",
            params![
                item.text.as_str(),
                item.assignee.as_deref(),
                item.category.as_deref(),
                item.completed,
                item.updated,
                item.id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: TodoId) -> StoreResult<bool> {
        let changed = self.conn.execute("DELETE FROM todo WHERE id = ?1;", params![id])?;
        Ok(changed > 0)
    }
}

fn parse_todo_row(row: &Row<'_>) -> rusqlite::Result<ToDoItem> {
    Ok(ToDoItem {
        id: row.get("id")?,
        text: row.get("text")?,
        assignee: row.get("assignee")?,
        category: row.get("category")?,
        completed: row.get("completed")?,
        created: row.get("created")?,
        updated: row.get("updated")?,
    })
}
