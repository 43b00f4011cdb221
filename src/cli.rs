//! Command-line interface parsing for wxsearch
//!
//! This module handles parsing of CLI arguments using clap, including an
//! optional initial search query and overrides for the config file.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The initial query contains nothing searchable
    #[error("Invalid query: '{0}'. Provide at least one non-space character")]
    EmptyQuery(String),
}

/// wxsearch - Search any place and view current weather and sea conditions
#[derive(Parser, Debug)]
#[command(name = "wxsearch")]
#[command(about = "Search a place and view current weather plus marine conditions")]
#[command(version)]
pub struct Cli {
    /// Start with this text already typed into the search box
    ///
    /// Examples:
    ///   wxsearch               # Start with an empty search box
    ///   wxsearch Denver        # Search for Denver right away
    ///   wxsearch "San Diego"   # Multi-word names need quotes
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Path to a TOML config file (defaults to the XDG config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quiet period in milliseconds before a search is sent
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Timeout in seconds for each HTTP request
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Write logs to this file instead of the cache directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Query to type into the search box on startup (if specified)
    pub initial_query: Option<String>,
}

/// Parses the initial query argument, trimming surrounding whitespace.
///
/// # Returns
/// * `Ok(String)` with the trimmed query
/// * `Err(CliError::EmptyQuery)` if nothing is left after trimming
pub fn parse_query_arg(s: &str) -> Result<String, CliError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyQuery(s.to_string()));
    }
    Ok(trimmed.to_string())
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if the query argument is blank
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        match &cli.query {
            None => Ok(StartupConfig::default()),
            Some(query) => Ok(StartupConfig {
                initial_query: Some(parse_query_arg(query)?),
            }),
        }
    }
}
