//! `fringe trip`: driving directions through a list of locations

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use fringe_core::error::{FringeError, Result};
use fringe_core::format::OutputFormat;
use fringe_core::trip::{self, Directions};
use tracing::debug;

use crate::cli::TripArgs;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, args: &TripArgs) -> Result<()> {
    let map = args
        .map
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.trip.map));
    let request = read_request(args)?;

    let directions = trip::trip(&map, &request)?;
    debug!(elapsed = ?ctx.start.elapsed(), legs = directions.legs.len(), "trip");

    let rendered = render(&directions, ctx.cli.format, &ctx.config.trip.units)?;
    match &args.out {
        Some(path) => fs::write(path, rendered)
            .map_err(|e| FringeError::io_operation("write", path.display(), e)),
        None => {
            print!("{}", rendered);
            Ok(())
        }
    }
}

fn read_request(args: &TripArgs) -> Result<String> {
    match &args.request {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| FringeError::io_operation("read", path.display(), e)),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| FringeError::io_operation("read", "stdin", e))?;
            Ok(text)
        }
    }
}

fn render(directions: &Directions, format: OutputFormat, units: &str) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(directions)?)),
        OutputFormat::Human => Ok(directions.render(units)),
    }
}
