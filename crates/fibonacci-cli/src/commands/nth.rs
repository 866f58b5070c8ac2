//! # Nth Command
//!
//! Print a single term.

use anyhow::Context;
use fibonacci_core::{checked_nth_term, nth_term, MAX_INDEX};
use tracing::warn;

use crate::config::OutputConfig;
use crate::render::{self, Term};

/// Run the nth command
pub fn run(n: u32, wrapping: bool, config: &OutputConfig) -> anyhow::Result<()> {
    let value = if wrapping {
        if n > MAX_INDEX {
            warn!("F({n}) exceeds 64 bits, printing the value modulo 2^64");
        }
        nth_term(n)
    } else {
        checked_nth_term(n).context("use --wrapping to print the value modulo 2^64")?
    };

    let term = Term::new(n, value);
    if config.is_json() {
        render::print_json(&term)
    } else {
        println!("{}", render::format_term(&term, config.width));
        Ok(())
    }
}
