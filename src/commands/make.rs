//! `fringe make`: bring targets up to date

use std::path::PathBuf;

use fringe_core::error::Result;
use fringe_core::format::OutputFormat;
use fringe_core::make::{self, BuildReport};
use tracing::debug;

use crate::cli::MakeArgs;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, args: &MakeArgs) -> Result<()> {
    let makefile = args
        .makefile
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.make.makefile));
    let fileinfo = args
        .fileinfo
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.make.fileinfo));

    let report = make::make(&makefile, &fileinfo, &args.targets)?;
    debug!(elapsed = ?ctx.start.elapsed(), commands = report.commands.len(), "make");

    print!("{}", render(&report, ctx.cli.format)?);
    Ok(())
}

fn render(report: &BuildReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
        OutputFormat::Human => Ok(report
            .commands
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()),
    }
}
