//! # Fibonacci Core
//!
//! Pure, stateless Fibonacci sequence utilities.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     FibonacciSequence                       │
//! │                                                             │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐       │
//! │  │   nth_term   │  │   sequence   │  │ FIBONACCI_20 │       │
//! │  └──────────────┘  └──────────────┘  └──────────────┘       │
//! │                                                             │
//! │  ┌──────────────┐  ┌──────────────┐                         │
//! │  │ is_fibonacci │  │ position_of  │                         │
//! │  └──────────────┘  └──────────────┘                         │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation shares the recurrence F(0)=0, F(1)=1, F(n)=F(n-1)+F(n-2).
//! The evaluators are `const fn`, so the same code runs at compile time and
//! at runtime:
//!
//! ```
//! use fibonacci_core::nth_term;
//!
//! const AT_COMPILE_TIME: u64 = nth_term(15);
//! let n = 15;
//! assert_eq!(AT_COMPILE_TIME, nth_term(n));
//! ```
//!
//! ## Overflow
//!
//! Values are `u64`. F(93) is the largest representable term; [`nth_term`]
//! and [`sequence_prefix`] wrap modulo 2^64 past [`MAX_INDEX`]. Use
//! [`checked_nth_term`] to get an error instead.

pub mod query;
pub mod sequence;

pub use query::{is_fibonacci, position_of};
pub use sequence::{
    checked_nth_term, nth_term, sequence_array, sequence_prefix, FIBONACCI_20, MAX_INDEX,
};

use thiserror::Error;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FibonacciError {
    #[error("F({index}) overflows a 64-bit value (largest representable index is {max})")]
    Overflow { index: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, FibonacciError>;
