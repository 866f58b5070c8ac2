//! # fib
//!
//! Console driver for the Fibonacci core.

mod cli;
mod commands;
mod config;
mod render;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cli::{Cli, Commands};
use config::OutputConfig;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Default to warn to keep output clean; RUST_LOG takes precedence
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = OutputConfig::from_cli(&cli)?;
    if !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Commands::Nth { n, wrapping }) => commands::nth::run(n, wrapping, &config)?,
        Some(Commands::Sequence { count }) => commands::sequence::run(count, &config)?,
        Some(Commands::Check { ref values }) => commands::check::run(values, &config)?,
        Some(Commands::Position { value }) => commands::position::run(value, &config)?,
        Some(Commands::Table) => commands::table::run(&config)?,
        Some(Commands::Completions { shell }) => cli::generate_completions(shell),
        Some(Commands::Demo) | None => commands::demo::run(&config)?,
    }

    Ok(())
}
