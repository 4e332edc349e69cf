//! Greeting and arithmetic operations
//!
//! Stateless operations exposed through the same adapters as the record
//! access service.

use crate::domain::models::ValidationError;

/// Greet someone by name
#[must_use]
pub fn hello(name: &str) -> String {
    format!("hello {name}")
}

/// Add two or three integers
pub fn add_numbers(num_a: i64, num_b: i64, num_c: Option<i64>) -> Result<i64, ValidationError> {
    let overflow = || {
        let mut operands = vec![num_a, num_b];
        operands.extend(num_c);
        ValidationError::Overflow(operands)
    };

    let sum = num_a.checked_add(num_b).ok_or_else(overflow)?;
    match num_c {
        Some(c) => sum.checked_add(c).ok_or_else(overflow),
        None => Ok(sum),
    }
}
