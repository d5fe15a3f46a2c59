//! Command dispatch logic for fringe

use std::time::Instant;

use crate::cli::{Cli, Commands};
use fringe_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = command::load_config(cli)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Make(args) => crate::commands::make::execute(ctx, args),
            Commands::Trip(args) => crate::commands::trip::execute(ctx, args),
        }
    }
}
