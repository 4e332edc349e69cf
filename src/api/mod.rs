//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and handlers that
//! can be used by any HTTP server implementation or called directly.
//!
//! ## Design
//!
//! - **Handlers are thin**: Take typed input, call one service operation, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    add_numbers, create_todo, delete_todo, get_todo, hello, list_todos, list_todos_by_assignee,
    list_todos_by_category, update_todo,
};
pub use types::{
    AddNumbersQuery, ApiResponse, AssigneeQuery, CategoryQuery, CreateTodoRequest, HelloQuery,
    IdQuery, MessageData, TodoCreateData, TodoData, TodoMutationData, TodosData,
    UpdateTodoRequest,
};
