//! Output formatting for human and JSON modes
//!
//! This module provides structured CLI results that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::domain::models::{ToDoItem, TodoId};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct TodoListResult {
    /// Number of items listed
    pub total: usize,
    /// The items
    pub todos: Vec<ToDoItem>,
}

/// Result of a get operation
#[derive(Debug, Serialize)]
pub struct TodoShowResult {
    /// The item
    pub todo: ToDoItem,
}

/// Result of a create operation
#[derive(Debug, Serialize)]
pub struct TodoCreateResult {
    /// Id assigned to the new item
    pub id: TodoId,
    /// Task text of the new item
    pub text: String,
}

/// Result of an update or delete operation
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation reported success
    pub success: bool,
    /// Item the operation targeted
    pub id: TodoId,
    /// Result word ("Success", "No change" or "Failure")
    pub result: String,
}

/// Result of a greeting or arithmetic operation
#[derive(Debug, Serialize)]
pub struct MessageResult {
    /// The computed message
    pub message: serde_json::Value,
}

/// Format one item as a single line: `#id [x] text (assignee: .., category: ..)`
#[must_use]
pub fn format_todo_line(todo: &ToDoItem) -> String {
    let mark = if todo.completed { "x" } else { " " };
    let mut line = format!("#{} [{mark}] {}", todo.id, todo.text);

    let labels: Vec<String> = [("assignee", &todo.assignee), ("category", &todo.category)]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name}: {v}")))
        .collect();
    if !labels.is_empty() {
        line.push_str(&format!(" ({})", labels.join(", ")));
    }
    line
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl TodoListResult {
    /// Build a list result
    #[must_use]
    pub fn new(todos: Vec<ToDoItem>) -> Self {
        Self {
            total: todos.len(),
            todos,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.todos.is_empty() {
            println!("No to-do items.");
            return;
        }

        for todo in &self.todos {
            println!("  {}", format_todo_line(todo));
        }
        println!("\n{} item(s)", self.total);
    }
}

impl TodoShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let todo = &self.todo;
        println!("To-do #{}", todo.id);
        println!("  Text:      {}", todo.text);
        println!("  Assignee:  {}", todo.assignee.as_deref().unwrap_or("-"));
        println!("  Category:  {}", todo.category.as_deref().unwrap_or("-"));
        println!("  Completed: {}", if todo.completed { "yes" } else { "no" });
        println!("  Created:   {}", todo.created.to_rfc3339());
        if let Some(updated) = todo.updated {
            println!("  Updated:   {}", updated.to_rfc3339());
        }
    }
}

impl TodoCreateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Created to-do #{}: {}", self.id, self.text);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let word = match self.result.as_str() {
                    "Success" => self.result.green(),
                    "Failure" => self.result.red(),
                    _ => self.result.yellow(),
                };
                println!("#{}: {word}", self.id);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl MessageResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.message {
                serde_json::Value::String(s) => println!("{s}"),
                other => println!("{other}"),
            },
            OutputMode::Json => render_json(self),
        }
    }
}
