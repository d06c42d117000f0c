//! CLI argument parsing for degrees
//!
//! One invocation is one search: read the credits database, connect two
//! people, print the chain.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Default target, honoring the game the tool is named after.
pub const DEFAULT_TARGET: &str = "Bacon, Kevin";

/// degrees - six degrees of separation over a movie credits database
#[derive(Parser, Debug)]
#[command(name = "degrees")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Credits database: one line per movie, fields separated by "/";
    /// the first field is the movie title, the rest are actor names
    pub database: PathBuf,

    /// Person to connect from
    pub name: String,

    /// Person to connect to
    #[arg(long, default_value = DEFAULT_TARGET)]
    pub to: String,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Raise log verbosity to debug
    #[arg(long, short)]
    pub verbose: bool,

    /// Explicit log level or filter directive (overrides --verbose)
    #[arg(long, env = "DEGREES_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Output format for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default): one name per line
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}
