//! Implementation of the `hunkstat hunk` command.

use super::report::{FileReport, render};
use super::ReportOptions;
use crate::cli::HunkArgs;
use hunkstat::config::Config;
use hunkstat::diff::{Hunk, read_body};
use hunkstat::error::{HunkstatError, Result};
use std::fs::File;

/// Execute the `hunkstat hunk` command.
///
/// Reads one hunk body from a file (or stdin for `-` / no path) and
/// reports its Stat.
pub fn cmd_hunk(args: HunkArgs, config: &Config, options: &ReportOptions) -> Result<String> {
    let (name, body) = match &args.body {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).map_err(|e| {
                HunkstatError::InputError(format!(
                    "failed to open hunk body '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            (
                path.display().to_string(),
                read_body(file, config.max_input_bytes)?,
            )
        }
        _ => (
            "<stdin>".to_string(),
            read_body(std::io::stdin().lock(), config.max_input_bytes)?,
        ),
    };

    let hunk = Hunk::new(args.orig_start, args.new_start, body);
    let report = FileReport::for_hunks(name, std::slice::from_ref(&hunk), options.per_hunk);

    render(&[report], options)
}
