//! # Demo Command
//!
//! Walks through every operation of the core: direct evaluation, the
//! precomputed table, a fixed-size prefix, membership checks, and the
//! compile-time vs runtime comparison.

use fibonacci_core::{nth_term, sequence_array, FIBONACCI_20};
use serde::Serialize;
use std::hint::black_box;

use crate::commands::check::DEMO_VALUES;
use crate::config::OutputConfig;
use crate::render::{self, Membership, Style, Term};

const COMPARE_INDEX: u32 = 15;
const COMPILE_TIME: u64 = nth_term(COMPARE_INDEX);
const FIRST_11: [u64; 11] = sequence_array::<11>();
const LARGE_INDEX: u32 = 40;
/// Value column width for the short fixed-size block
const FIRST_11_WIDTH: usize = 4;

/// Compile-time and runtime evaluation of the same term
#[derive(Debug, Serialize)]
struct Comparison {
    index: u32,
    compile_time: u64,
    runtime: u64,
    matches: bool,
}

#[derive(Debug, Serialize)]
struct Walkthrough {
    computed: Vec<Term>,
    table: Vec<Term>,
    first_11: Vec<Term>,
    checks: Vec<Membership>,
    comparison: Comparison,
    large: Term,
}

fn walkthrough() -> Walkthrough {
    let computed = (0..=20u32).map(|i| Term::new(i, nth_term(i))).collect();
    // Keep the optimizer from folding this into a constant
    let runtime = nth_term(black_box(COMPARE_INDEX));

    Walkthrough {
        computed,
        table: render::indexed(&FIBONACCI_20),
        first_11: render::indexed(&FIRST_11),
        checks: DEMO_VALUES.iter().copied().map(Membership::of).collect(),
        comparison: Comparison {
            index: COMPARE_INDEX,
            compile_time: COMPILE_TIME,
            runtime,
            matches: COMPILE_TIME == runtime,
        },
        large: Term::new(LARGE_INDEX, nth_term(black_box(LARGE_INDEX))),
    }
}

/// Run the demo command
pub fn run(config: &OutputConfig) -> anyhow::Result<()> {
    let demo = walkthrough();

    if config.is_json() {
        return render::print_json(&demo);
    }

    render::print_heading("🔢 First 21 Fibonacci numbers (nth_term):");
    render::print_terms(&demo.computed, config)?;

    render::print_heading("🎯 Precomputed table:");
    render::print_terms(&demo.table, config)?;

    render::print_heading("📋 Fixed-size sequence (first 11):");
    let narrow = OutputConfig {
        width: FIRST_11_WIDTH,
        ..config.clone()
    };
    render::print_terms(&demo.first_11, &narrow)?;

    render::print_heading("🔍 Checking if numbers are Fibonacci:");
    for membership in &demo.checks {
        println!("{}", render::format_membership(membership));
    }

    let cmp = &demo.comparison;
    render::print_heading("⚡ Compile-time vs runtime:");
    println!("Compile-time F({}) = {}", cmp.index, cmp.compile_time);
    println!("Runtime      F({}) = {}", cmp.index, cmp.runtime);
    println!(
        "Results match: {}",
        if cmp.matches { "✅" } else { "❌" }
    );

    render::print_heading("🚀 Larger term:");
    println!("F({}) = {}", demo.large.index, demo.large.value);

    println!();
    render::print_styled("Fibonacci walkthrough complete", Style::Success);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkthrough_contents() {
        let demo = walkthrough();
        assert_eq!(demo.computed, demo.table);
        assert_eq!(demo.first_11.len(), 11);
        assert_eq!(demo.first_11[10], Term::new(10, 55));
        assert_eq!(demo.checks.len(), DEMO_VALUES.len());
        assert!(demo.comparison.matches);
        assert_eq!(demo.comparison.runtime, 610);
        assert_eq!(demo.large.value, 102_334_155);
    }

    #[test]
    fn test_demo_checks() {
        let demo = walkthrough();
        let misses: Vec<u64> = demo
            .checks
            .iter()
            .filter(|m| !m.is_fibonacci)
            .map(|m| m.value)
            .collect();
        assert_eq!(misses, vec![4, 100]);
    }
}
