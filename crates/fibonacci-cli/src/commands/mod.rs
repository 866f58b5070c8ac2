//! # CLI Commands
//!
//! Subcommand implementations for the fib CLI. Every command takes the
//! shared [`OutputConfig`](crate::config::OutputConfig) explicitly.

pub mod check;
pub mod demo;
pub mod nth;
pub mod position;
pub mod sequence;
pub mod table;
