//! # Output Configuration
//!
//! How results are rendered. Built once in `main` from command-line flags and
//! environment variables, then passed by reference to every command.
//!
//! ## Sources (in priority order)
//!
//! 1. Command-line flags
//! 2. Environment variables (`FIB_FORMAT`, bound by clap, and `NO_COLOR`)
//! 3. Default values

use clap::ValueEnum;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::cli::Cli;

/// Widest value column accepted; u64::MAX has 20 digits.
pub const MAX_WIDTH: usize = 32;

/// Errors that can occur in configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned human-readable rows
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Use ANSI colors in text output
    pub color: bool,

    /// Width of the value column in text output
    pub width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            width: 8,
        }
    }
}

impl OutputConfig {
    /// Build from parsed arguments, apply environment overrides and validate
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Self {
            format: cli.format,
            color: !cli.no_color,
            width: cli.width,
        }
        .apply_env_overrides();

        config.validate()?;
        debug!(?config, "Output configuration");
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    fn apply_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // https://no-color.org: any non-empty value disables color
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(ConfigError::InvalidConfig(format!(
                "Width must be between 1 and {MAX_WIDTH}, got {}",
                self.width
            )));
        }
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
