//! # Table Command
//!
//! Print the precomputed table.

use fibonacci_core::FIBONACCI_20;

use crate::config::OutputConfig;
use crate::render;

/// Run the table command
pub fn run(config: &OutputConfig) -> anyhow::Result<()> {
    render::print_terms(&render::indexed(&FIBONACCI_20), config)
}
