//! # Terminal Rendering
//!
//! Utilities for rendering results to the terminal as text or JSON.

use colored::Colorize;
use serde::Serialize;

use crate::config::OutputConfig;

/// Output style
pub enum Style {
    Info,
    Success,
}

/// Print a message with a style
pub fn print_styled(message: &str, style: Style) {
    let prefix = match style {
        Style::Info => "Info:".bright_cyan().bold().to_string(),
        Style::Success => "✓".bright_green().bold().to_string(),
    };

    println!("{} {}", prefix, message);
}

/// Print a section heading
pub fn print_heading(title: &str) {
    println!();
    println!("{}", title.bright_cyan().bold());
}

/// One term of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Term {
    pub index: u32,
    pub value: u64,
}

impl Term {
    pub fn new(index: u32, value: u64) -> Self {
        Self { index, value }
    }
}

/// Terms F(0), F(1), ... paired with their indices
pub fn indexed(values: &[u64]) -> Vec<Term> {
    (0u32..).zip(values.iter().copied()).map(|(i, v)| Term::new(i, v)).collect()
}

/// Result of a membership check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Membership {
    pub value: u64,
    pub is_fibonacci: bool,
    pub position: Option<u32>,
}

impl Membership {
    pub fn of(value: u64) -> Self {
        let position = fibonacci_core::position_of(value);
        Self {
            value,
            is_fibonacci: position.is_some(),
            position,
        }
    }
}

/// Result of a position lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub value: u64,
    pub position: Option<u32>,
}

/// `F( n) = value`, with the value right-aligned to `width`
pub fn format_term(term: &Term, width: usize) -> String {
    format!("F({:>2}) = {:>width$}", term.index, term.value, width = width)
}

/// `55 is ✅ a Fibonacci number (position 10)`
pub fn format_membership(membership: &Membership) -> String {
    match membership.position {
        Some(position) if membership.is_fibonacci => {
            let note = format!("(position {position})");
            format!(
                "{} is {} a Fibonacci number {}",
                membership.value,
                "✅".green(),
                note.dimmed()
            )
        }
        _ => format!("{} is {} a Fibonacci number", membership.value, "❌".red()),
    }
}

/// Print terms as rows, or as a JSON array
pub fn print_terms(terms: &[Term], config: &OutputConfig) -> anyhow::Result<()> {
    if config.is_json() {
        return print_json(&terms);
    }
    for term in terms {
        println!("{}", format_term(term, config.width));
    }
    Ok(())
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
