//! Pure API handlers
//!
//! These handlers are HTTP-agnostic: they take a service and typed input,
//! call exactly one domain operation, and return `Result<T, ApiError>`.

use crate::domain::ports::TodoStore;
use crate::domain::services::{TodoService, greet};

use super::error::ApiError;
use super::types::{
    AddNumbersQuery, AssigneeQuery, CategoryQuery, CreateTodoRequest, HelloQuery, IdQuery,
    MessageData, TodoCreateData, TodoData, TodoMutationData, TodosData, UpdateTodoRequest,
};

// =============================================================================
// TODOS
// =============================================================================

/// List all items
pub fn list_todos<S: TodoStore>(service: &TodoService<S>) -> Result<TodosData, ApiError> {
    let todos = service.list_all()?;
    Ok(TodosData { todos })
}

/// List items in a category
pub fn list_todos_by_category<S: TodoStore>(
    service: &TodoService<S>,
    query: &CategoryQuery,
) -> Result<TodosData, ApiError> {
    let todos = service.list_by_category(&query.category)?;
    Ok(TodosData { todos })
}

/// List items assigned to a person
pub fn list_todos_by_assignee<S: TodoStore>(
    service: &TodoService<S>,
    query: &AssigneeQuery,
) -> Result<TodosData, ApiError> {
    let todos = service.list_by_assignee(&query.assignee)?;
    Ok(TodosData { todos })
}

/// Get a single item by id
pub fn get_todo<S: TodoStore>(
    service: &TodoService<S>,
    query: IdQuery,
) -> Result<TodoData, ApiError> {
    let todo = service.get_by_id(query.id)?;
    Ok(TodoData { todo })
}

/// Create a new item
pub fn create_todo<S: TodoStore>(
    service: &TodoService<S>,
    req: CreateTodoRequest,
) -> Result<TodoCreateData, ApiError> {
    let id = service.create(&req.into())?;
    Ok(TodoCreateData { id })
}

/// Delete an item
pub fn delete_todo<S: TodoStore>(
    service: &TodoService<S>,
    query: IdQuery,
) -> Result<TodoMutationData, ApiError> {
    let outcome = service.delete(query.id)?;
    Ok(TodoMutationData {
        result: outcome.as_str(),
    })
}

/// Update the supplied fields of an item
pub fn update_todo<S: TodoStore>(
    service: &TodoService<S>,
    req: UpdateTodoRequest,
) -> Result<TodoMutationData, ApiError> {
    let (id, patch) = req.into_parts();
    let outcome = service.update(id, &patch)?;
    Ok(TodoMutationData {
        result: outcome.as_str(),
    })
}

// =============================================================================
// GREETING
// =============================================================================

/// Greet someone by name
#[must_use]
pub fn hello(query: &HelloQuery) -> MessageData<String> {
    MessageData {
        message: greet::hello(&query.name),
    }
}

/// Add two or three numbers
pub fn add_numbers(query: AddNumbersQuery) -> Result<MessageData<i64>, ApiError> {
    let message = greet::add_numbers(query.num_a, query.num_b, query.num_c)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    Ok(MessageData { message })
}
