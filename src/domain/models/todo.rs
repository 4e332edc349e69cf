//! To-do item model
//!
//! A to-do item is a short task description with an optional assignee and
//! category. Items are created once, changed through partial patches, and
//! removed with a hard delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of the task text, in characters
pub const TEXT_MAX_CHARS: usize = 140;

/// Maximum length of the assignee and category labels, in characters
pub const LABEL_MAX_CHARS: usize = 60;

/// Store-assigned record identity
pub type TodoId = i64;

/// Field constraint violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Task text was empty or whitespace only
    #[error("todo text cannot be empty")]
    EmptyText,

    /// A field exceeded its length limit
    #[error("{field} is {len} characters long, the limit is {max}")]
    TooLong {
        /// Name of the offending field
        field: &'static str,
        /// Actual length in characters
        len: usize,
        /// Allowed length in characters
        max: usize,
    },

    /// Integer arithmetic overflowed
    #[error("sum of {0:?} overflows a 64-bit integer")]
    Overflow(Vec<i64>),
}

/// A persisted to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoItem {
    /// Identity assigned by the store on creation
    pub id: TodoId,

    /// What needs to be done
    pub text: String,

    /// Person responsible
    #[serde(default)]
    pub assignee: Option<String>,

    /// Grouping label
    #[serde(default)]
    pub category: Option<String>,

    /// Whether the item is done
    #[serde(default)]
    pub completed: bool,

    /// When the item was created
    pub created: DateTime<Utc>,

    /// When an update last changed the item (absent until then)
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

/// Fields supplied when creating a to-do item
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NewTodo {
    /// Task text (required)
    pub text: String,
    /// Optional assignee
    #[serde(default)]
    pub assignee: Option<String>,
    /// Optional category
    #[serde(default)]
    pub category: Option<String>,
}

impl NewTodo {
    /// Create a new item description with only the task text set
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            assignee: None,
            category: None,
        }
    }

    /// Set the assignee
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check the field constraints
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text(&self.text)?;
        validate_label("assignee", self.assignee.as_deref())?;
        validate_label("category", self.category.as_deref())
    }

    /// Copy with empty optional labels turned into absent ones
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            text: self.text.clone(),
            assignee: non_empty(self.assignee.as_deref()),
            category: non_empty(self.category.as_deref()),
        }
    }
}

/// Optional fields supplied when updating a to-do item
///
/// `None` leaves a field untouched. Empty strings count as not supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TodoPatch {
    /// Replacement task text
    #[serde(default)]
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

impl TodoPatch {
    /// Patch that only replaces the task text
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// True when no field is supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        non_empty(self.text.as_deref()).is_none()
            && non_empty(self.assignee.as_deref()).is_none()
            && non_empty(self.category.as_deref()).is_none()
            && self.completed.is_none()
    }

    /// Check the constraints of every supplied field
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(text) = non_empty(self.text.as_deref()) {
            validate_text(&text)?;
        }
        validate_label("assignee", self.assignee.as_deref())?;
        validate_label("category", self.category.as_deref())
    }

    /// Apply the supplied fields to `item`
    ///
    /// Returns true if any field value actually changed. Timestamps are not
    /// touched.
    pub fn apply_to(&self, item: &mut ToDoItem) -> bool {
        let before = item.clone();

        if let Some(text) = non_empty(self.text.as_deref()) {
            item.text = text;
        }
        if let Some(assignee) = non_empty(self.assignee.as_deref()) {
            item.assignee = Some(assignee);
        }
        if let Some(category) = non_empty(self.category.as_deref()) {
            item.category = Some(category);
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }

        *item != before
    }
}

fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    check_length("text", text, TEXT_MAX_CHARS)
}

fn validate_label(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| check_length(field, v, LABEL_MAX_CHARS))
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, len, max });
    }
    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}
