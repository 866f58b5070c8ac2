//! # Check Command
//!
//! Membership checks for a list of values.

use crate::config::OutputConfig;
use crate::render::{self, Membership, Style};

/// Checked when no values are given
pub const DEMO_VALUES: [u64; 15] = [0, 1, 2, 3, 4, 5, 8, 13, 21, 34, 55, 89, 100, 144, 233];

/// Run the check command
pub fn run(values: &[u64], config: &OutputConfig) -> anyhow::Result<()> {
    let values = if values.is_empty() { &DEMO_VALUES[..] } else { values };
    let results: Vec<Membership> = values.iter().copied().map(Membership::of).collect();

    if config.is_json() {
        return render::print_json(&results);
    }

    for membership in &results {
        println!("{}", render::format_membership(membership));
    }

    let hits = results.iter().filter(|m| m.is_fibonacci).count();
    println!();
    render::print_styled(
        &format!("{hits} of {} values are Fibonacci numbers", results.len()),
        Style::Info,
    );
    Ok(())
}
