//! CLI argument parsing for fringe
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{MakeArgs, TripArgs};
pub use fringe_core::format::OutputFormat;
use parse::parse_format;

/// Fringe - rebuild planning and route finding over a pausable graph traversal
#[derive(Parser, Debug)]
#[command(name = "fringe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. `debug`, `fringe_core::traversal=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ./fringe.toml when present)
    #[arg(long, global = true, env = "FRINGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the commands needed to bring targets up to date
    Make(MakeArgs),

    /// Print driving directions through a list of locations
    Trip(TripArgs),
}
