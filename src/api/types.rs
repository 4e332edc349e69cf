//! API request and response types
//!
//! All types are framework-agnostic. Request types deserialize from decoded
//! query strings, so every argument arrives as text and is coerced to the
//! declared field type.

use serde::{Deserialize, Serialize};

use crate::domain::models::{NewTodo, ToDoItem, TodoId, TodoPatch};

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Query for listing items in one category
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    /// Category to match exactly
    #[serde(default)]
    pub category: String,
}

/// Query for listing items assigned to one person
#[derive(Debug, Deserialize)]
pub struct AssigneeQuery {
    /// Assignee to match exactly
    #[serde(default)]
    pub assignee: String,
}

/// Query addressing one item
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdQuery {
    /// Item id
    pub id: TodoId,
}

/// Request for creating an item
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Task text
    #[serde(rename = "todo", alias = "text")]
    pub text: String,
    /// Optional assignee
    #[serde(default)]
    pub assignee: Option<String>,
    /// Optional category
    #[serde(default)]
    pub category: Option<String>,
}

impl From<CreateTodoRequest> for NewTodo {
    fn from(req: CreateTodoRequest) -> Self {
        Self {
            text: req.text,
            assignee: req.assignee,
            category: req.category,
        }
    }
}

/// Request for updating an item
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    /// Item id
    pub id: TodoId,
    /// Replacement task text
    #[serde(default, rename = "todo", alias = "text")]
    pub text: Option<String>,
    /// Replacement assignee
    #[serde(default)]
    pub assignee: Option<String>,
    /// Replacement category
    #[serde(default)]
    pub category: Option<String>,
    /// Replacement completion flag
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// Split into the target id and the patch to apply
    #[must_use]
    pub fn into_parts(self) -> (TodoId, TodoPatch) {
        (
            self.id,
            TodoPatch {
                text: self.text,
                assignee: self.assignee,
                category: self.category,
                completed: self.completed,
            },
        )
    }
}

/// Query for the greeting endpoint
#[derive(Debug, Deserialize)]
pub struct HelloQuery {
    /// Name to greet
    pub name: String,
}

/// Query for the addition endpoint
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AddNumbersQuery {
    /// First operand
    pub num_a: i64,
    /// Second operand
    pub num_b: i64,
    /// Optional third operand
    #[serde(default)]
    pub num_c: Option<i64>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// List endpoints response data
#[derive(Debug, Serialize)]
pub struct TodosData {
    /// Matching items
    pub todos: Vec<ToDoItem>,
}

/// Single item response data
#[derive(Debug, Serialize)]
pub struct TodoData {
    /// The item
    pub todo: ToDoItem,
}

/// Create endpoint response data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TodoCreateData {
    /// Id assigned to the new item
    pub id: TodoId,
}

/// Update and delete endpoint response data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TodoMutationData {
    /// Result word ("Success", "No change" or "Failure")
    pub result: &'static str,
}

/// Greeting and addition response data
#[derive(Debug, Serialize)]
pub struct MessageData<T> {
    /// The computed message
    pub message: T,
}
