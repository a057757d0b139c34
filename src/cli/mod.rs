//! CLI argument parsing for towngraph
//!
//! Global flags: --file, --config, --format, --strict, --quiet, --verbose

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Towngraph - towns, roads, and the shortest routes between them
#[derive(Parser, Debug)]
#[command(name = "towngraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Road data file, one `roadName,weight;town1;town2` per line
    #[arg(long, short, global = true, env = "TOWNGRAPH_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file (defaults to ./towngraph.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Fail on the first malformed or rejected line of road data
    #[arg(long, global = true)]
    pub strict: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the road data and report what was added or rejected
    Load,

    /// List all towns in alphabetical order
    Towns,

    /// List all road names in alphabetical order
    Roads,

    /// Show the road connecting two towns
    Road {
        /// First town ("Lastname, Firstname")
        town1: String,
        /// Second town
        town2: String,
    },

    /// Show the roads leaving a town
    Edges {
        /// Town name
        town: String,
    },

    /// Find the shortest route between two towns
    Path {
        /// Starting town
        from: String,
        /// Destination town
        to: String,
    },
}
