//! # Sequence Command
//!
//! Print F(0) through F(count).

use fibonacci_core::{sequence_prefix, MAX_INDEX};
use tracing::warn;

use crate::config::OutputConfig;
use crate::render;

/// Run the sequence command
pub fn run(count: u32, config: &OutputConfig) -> anyhow::Result<()> {
    if count > MAX_INDEX {
        warn!("Terms past F({MAX_INDEX}) exceed 64 bits and wrap modulo 2^64");
    }

    let terms = render::indexed(&sequence_prefix(count));
    render::print_terms(&terms, config)
}
