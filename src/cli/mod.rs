//! CLI argument parsing for hunkstat.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use hunkstat::config::OutputFormat;
use hunkstat::diff::InputFormat;
use std::path::PathBuf;

/// Hunkstat: line statistics for already-parsed unified-diff hunks.
///
/// Counts added, deleted and changed lines (an adjacent deletion and
/// addition count as one changed line) and reports the line intervals
/// they touch in the old and new file.
#[derive(Parser, Debug)]
#[command(name = "hunkstat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command. Flags override the config file.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Path to a YAML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit line intervals from text reports.
    #[arg(long, global = true)]
    pub no_intervals: bool,

    /// Also report the statistics of each hunk.
    #[arg(long, global = true)]
    pub per_hunk: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands for hunkstat.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report statistics for every file diff in a JSON or YAML document.
    ///
    /// The document holds one file diff or a list of them, each with
    /// `orig_name`, `new_name` and `hunks` (`orig_start_line`,
    /// `new_start_line`, `body`).
    File(FileArgs),

    /// Report statistics for a single hunk body.
    ///
    /// The body is read from a file, or from stdin when omitted or `-`.
    Hunk(HunkArgs),
}

/// Arguments for the `file` command.
#[derive(Parser, Debug)]
pub struct FileArgs {
    /// Document containing the parsed file diffs.
    pub path: PathBuf,

    /// Encoding of the document (default: by file extension).
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,
}

/// Arguments for the `hunk` command.
#[derive(Parser, Debug)]
pub struct HunkArgs {
    /// First line number of the hunk in the old file.
    #[arg(long)]
    pub orig_start: usize,

    /// First line number of the hunk in the new file.
    #[arg(long)]
    pub new_start: usize,

    /// File holding the hunk body (stdin when omitted or `-`).
    pub body: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
