//! Error taxonomy for record access operations

use thiserror::Error;

use super::models::{TodoId, ValidationError};
use super::ports::StoreError;

/// Result alias used by every service operation
pub type TodoResult<T> = Result<T, TodoError>;

/// Errors surfaced by service operations
///
/// Nothing is retried or recovered locally: each variant reaches the
/// adapter layer as-is.
#[derive(Debug, Error)]
pub enum TodoError {
    /// A required field is missing or a field breaks its constraints
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The id does not reference an existing record
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// The persistence layer failed or could not be reached
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}
