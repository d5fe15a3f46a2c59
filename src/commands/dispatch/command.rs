//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use fringe_core::config::FringeConfig;
use fringe_core::error::Result;

/// Load configuration from `--config`, else `fringe.toml` in the working
/// directory, else defaults
pub fn load_config(cli: &Cli) -> Result<FringeConfig> {
    match &cli.config {
        Some(path) => FringeConfig::load(path),
        None => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            FringeConfig::discover(&cwd)
        }
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a FringeConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a FringeConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("fringe {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Rebuild planning and route finding over a pausable graph traversal.");
        println!();
        println!("Run `fringe --help` for usage information.");
        Ok(())
    }
}
