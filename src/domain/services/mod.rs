//! Domain services
//!
//! - `TodoService`: record access operations over a `TodoStore`
//! - `greet`: stateless greeting and arithmetic operations

pub mod greet;
mod todos;

pub use todos::TodoService;
