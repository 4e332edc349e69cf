//! To-do commands - one subcommand per record access operation

use std::path::Path;

use todobox::adapters::sqlite::SqliteTodoStore;
use todobox::domain::models::{NewTodo, TodoId, TodoPatch};
use todobox::domain::services::TodoService;
use todobox::output::{
    OperationResult, OutputMode, TodoCreateResult, TodoListResult, TodoShowResult,
};

use super::open_store;

/// List every item
pub fn all(db_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let conn = open_store(db_path)?;
    let service = TodoService::new(SqliteTodoStore::new(&conn));

    TodoListResult::new(service.list_all()?).render(mode);
    Ok(())
}

/// List items in a category
pub fn by_category(db_path: &Path, category: &str, mode: OutputMode) -> anyhow::Result<()> {
    let conn = open_store(db_path)?;
    let service = TodoService::new(SqliteTodoStore::new(&conn));

    TodoListResult::new(service.list_by_category(category)?).render(mode);
    Ok(())
}

/// List items assigned to a person
pub fn by_assignee(db_path: &Path, assignee: &str, mode: OutputMode) -> anyhow::Result<()> {
    let conn = open_store(db_path)?;
    let service = TodoService::new(SqliteTodoStore::new(&conn));

    TodoListResult::new(service.list_by_assignee(assignee)?).render(mode);
    Ok(())
}

/// Show one item
pub fn get(db_path: &Path, id: TodoId, mode: OutputMode) -> anyhow::Result<()> {
    let conn = open_store(db_path)?;
    let service = TodoService::new(SqliteTodoStore::new(&conn));

    let result = TodoShowResult {
        todo: service.get_by_id(id)?,
    };
    result.render(mode);
    Ok(())
}

/// Add an item
pub fn add(
    db_path: &Path,
    text: String,
    assignee: Option<String>,
    category: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let conn = open_store(db_path)?;
    let service = TodoService::new(SqliteTodoStore::new(&conn));

    let todo = NewTodo {
        text,
        assignee,
        category,
    };
    let id = service.create(&todo)?;

    let result = TodoCreateResult { id, text: todo.text };
    result.render(mode);
    Ok(())
}

/// Delete an item
pub fn delete(db_path: &Path, id: TodoId, mode: OutputMode) -> anyhow::Result<()> {
    let conn = open_store(db_path)?;
    let service = TodoService::new(SqliteTodoStore::new(&conn));

    let outcome = service.delete(id)?;
    let result = OperationResult {
        success: outcome.is_success(),
        id,
        result: outcome.to_string(),
    };
    result.render(mode);

    if !outcome.is_success() {
        anyhow::bail!("todo {id} is still present after delete");
    }
    Ok(())
}

/// Change the supplied fields of an item
pub fn update(
    db_path: &Path,
    id: TodoId,
    patch: &TodoPatch,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let conn = open_store(db_path)?;
    let service = TodoService::new(SqliteTodoStore::new(&conn));

    let outcome = service.update(id, patch)?;
    let result = OperationResult {
        success: true,
        id,
        result: outcome.to_string(),
    };
    result.render(mode);
    Ok(())
}
