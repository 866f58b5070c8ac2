//! # CLI Arguments
//!
//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::OutputFormat;

/// Largest count `fib sequence` accepts
pub const MAX_SEQUENCE_COUNT: u32 = 10_000;

/// fib - Fibonacci sequence explorer
#[derive(Parser, Debug)]
#[command(name = "fib")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format: text, json
    #[arg(short, long, global = true, env = "FIB_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Width of the value column in text output
    #[arg(short, long, global = true, default_value_t = 8)]
    pub width: usize,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the nth Fibonacci number
    Nth {
        /// Index in the sequence (0-based)
        n: u32,
        /// Wrap modulo 2^64 instead of failing past F(93)
        #[arg(long)]
        wrapping: bool,
    },

    /// Print F(0) through F(COUNT)
    Sequence {
        /// Largest index to print
        #[arg(value_parser = clap::value_parser!(u32).range(..=MAX_SEQUENCE_COUNT as i64))]
        count: u32,
    },

    /// Check whether numbers are Fibonacci numbers
    Check {
        /// Numbers to check (defaults to a demo list)
        values: Vec<u64>,
    },

    /// Find the position of a Fibonacci number
    Position {
        /// Number to look up
        value: u64,
    },

    /// Print the precomputed table F(0)..F(20)
    Table,

    /// Walk through every operation (default)
    Demo,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Generate shell completions
pub fn generate_completions(shell: Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fib", &mut io::stdout());
}
