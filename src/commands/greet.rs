//! Greeting commands

use todobox::domain::services::greet;
use todobox::output::{MessageResult, OutputMode};

/// Say hello
pub fn hello(name: &str, mode: OutputMode) {
    let result = MessageResult {
        message: greet::hello(name).into(),
    };
    result.render(mode);
}

/// Add two or three numbers
pub fn add_numbers(
    num_a: i64,
    num_b: i64,
    num_c: Option<i64>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let sum = greet::add_numbers(num_a, num_b, num_c)?;
    let result = MessageResult {
        message: sum.into(),
    };
    result.render(mode);
    Ok(())
}
