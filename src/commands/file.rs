//! Implementation of the `hunkstat file` command.

use super::report::{FileReport, render};
use super::ReportOptions;
use crate::cli::FileArgs;
use hunkstat::config::Config;
use hunkstat::diff::load_file_diffs;
use hunkstat::error::Result;

/// Execute the `hunkstat file` command.
///
/// Loads every file diff from the document and reports one Stat per file.
/// `--input-format` takes precedence over the config's `input_format`.
pub fn cmd_file(args: FileArgs, config: &Config, options: &ReportOptions) -> Result<String> {
    let format = args.input_format.unwrap_or(config.input_format);
    let diffs = load_file_diffs(&args.path, format, config.max_input_bytes)?;

    if diffs.is_empty() {
        log::warn!("'{}' contains no file diffs", args.path.display());
    }

    let reports: Vec<FileReport> = diffs
        .iter()
        .map(|diff| FileReport::for_file_diff(diff, options.per_hunk))
        .collect();

    render(&reports, options)
}
