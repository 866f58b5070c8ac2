//! # Position Command
//!
//! Look up where a value sits in the sequence.

use fibonacci_core::position_of;

use crate::config::OutputConfig;
use crate::render::{self, Position};

/// Run the position command
///
/// Fails when the value is not a Fibonacci number.
pub fn run(value: u64, config: &OutputConfig) -> anyhow::Result<()> {
    let result = Position {
        value,
        position: position_of(value),
    };

    if config.is_json() {
        render::print_json(&result)?;
    }

    match result.position {
        Some(position) => {
            if !config.is_json() {
                println!("{position}");
            }
            Ok(())
        }
        None => anyhow::bail!("{value} is not a Fibonacci number"),
    }
}
