//! Command implementations for hunkstat.
//!
//! This module provides the dispatcher that resolves configuration and
//! routes CLI commands to their implementations. Commands return the
//! rendered report; the dispatcher writes it to stdout.

mod file;
mod hunk;
mod report;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command, GlobalArgs};
use hunkstat::config::{Config, OutputFormat};
use hunkstat::error::{HunkstatError, Result};
use std::io::Write;

/// Report settings after applying command-line overrides to the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub show_intervals: bool,
    pub per_hunk: bool,
}

impl ReportOptions {
    pub fn resolve(config: &Config, global: &GlobalArgs) -> Self {
        Self {
            format: global.format.unwrap_or(config.output_format),
            show_intervals: config.show_intervals && !global.no_intervals,
            per_hunk: config.per_hunk || global.per_hunk,
        }
    }
}

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(&cli.global)?;
    let options = ReportOptions::resolve(&config, &cli.global);
    log::debug!("report options: {:?}", options);

    let output = match cli.command {
        Command::File(args) => file::cmd_file(args, &config, &options)?,
        Command::Hunk(args) => hunk::cmd_hunk(args, &config, &options)?,
    };

    write_stdout(&output)
}

/// Load the config named by `--config`, or the defaults when none is given.
fn load_config(global: &GlobalArgs) -> Result<Config> {
    match &global.config {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn write_stdout(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| HunkstatError::OutputError(format!("failed to write report: {}", e)))
}
