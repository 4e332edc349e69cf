//! Record access service
//!
//! Each operation performs one check-then-act sequence against the store and
//! returns a structured result. Errors are propagated unchanged.

use chrono::Utc;
use log::debug;

use crate::domain::models::{DeleteOutcome, NewTodo, ToDoItem, TodoId, TodoPatch, UpdateOutcome};
use crate::domain::ports::{TodoFilter, TodoStore};
use crate::domain::{TodoError, TodoResult};

/// Record access operations over an explicitly provided store
#[derive(Debug)]
pub struct TodoService<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    /// Create a service backed by `store`
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// All items in store order
    pub fn list_all(&self) -> TodoResult<Vec<ToDoItem>> {
        Ok(self.store.list(&TodoFilter::All)?)
    }

    /// Items whose category equals `category` exactly
    ///
    /// An empty category matches nothing.
    pub fn list_by_category(&self, category: &str) -> TodoResult<Vec<ToDoItem>> {
        if category.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.store.list(&TodoFilter::Category(category.to_string()))?)
    }

    /// Items whose assignee equals `assignee` exactly
    ///
    /// An empty assignee matches nothing.
    pub fn list_by_assignee(&self, assignee: &str) -> TodoResult<Vec<ToDoItem>> {
        if assignee.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.store.list(&TodoFilter::Assignee(assignee.to_string()))?)
    }

    /// One item by id
    pub fn get_by_id(&self, id: TodoId) -> TodoResult<ToDoItem> {
        self.store.get(id)?.ok_or(TodoError::NotFound(id))
    }

    /// Persist a new item and return its id
    pub fn create(&self, todo: &NewTodo) -> TodoResult<TodoId> {
        todo.validate()?;

        let id = self.store.insert(&todo.normalized(), Utc::now())?;
        debug!("event=todo_create id={id}");
        Ok(id)
    }

    /// Hard-delete an item
    ///
    /// Deleting an id that does not exist is `NotFound`. After the delete the
    /// id is read back; a row that is still there reports `Failure`.
    pub fn delete(&self, id: TodoId) -> TodoResult<DeleteOutcome> {
        if self.store.get(id)?.is_none() {
            return Err(TodoError::NotFound(id));
        }

        self.store.delete(id)?;

        let outcome = if self.store.get(id)?.is_none() {
            DeleteOutcome::Success
        } else {
            DeleteOutcome::Failure
        };
        debug!("event=todo_delete id={id} result={outcome}");
        Ok(outcome)
    }

    /// Apply the supplied fields of `patch` to an item
    ///
    /// The record is only written, and `updated` only set, when a field
    /// value actually changes.
    pub fn update(&self, id: TodoId, patch: &TodoPatch) -> TodoResult<UpdateOutcome> {
        patch.validate()?;

        let current = self.get_by_id(id)?;
        if patch.is_empty() {
            debug!("event=todo_update id={id} result=no_fields");
            return Ok(UpdateOutcome::NoChange);
        }

        let mut next = current.clone();
        if !patch.apply_to(&mut next) {
            debug!("event=todo_update id={id} result=no_change");
            return Ok(UpdateOutcome::NoChange);
        }

        // Clock skew must not produce updated < created.
        next.updated = Some(Utc::now().max(current.created));

        if !self.store.update(&next)? {
            return Err(TodoError::NotFound(id));
        }
        debug!("event=todo_update id={id} result=success");
        Ok(UpdateOutcome::Success)
    }
}
