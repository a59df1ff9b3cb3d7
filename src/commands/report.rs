//! Report construction and rendering (text, JSON, YAML).

use super::ReportOptions;
use hunkstat::config::OutputFormat;
use hunkstat::diff::{FileDiff, Hunk, Stat, file_stat};
use hunkstat::error::{HunkstatError, Result};
use serde::Serialize;

/// Statistics for one file diff, optionally with its hunks.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub name: String,
    #[serde(flatten)]
    pub stat: Stat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hunks: Option<Vec<HunkReport>>,
}

/// Statistics for one hunk, keyed by its start lines.
#[derive(Debug, Clone, Serialize)]
pub struct HunkReport {
    pub orig_start_line: usize,
    pub new_start_line: usize,
    #[serde(flatten)]
    pub stat: Stat,
}

impl FileReport {
    pub fn for_file_diff(diff: &FileDiff, per_hunk: bool) -> Self {
        Self::for_hunks(diff.display_name(), &diff.hunks, per_hunk)
    }

    pub fn for_hunks(name: impl Into<String>, hunks: &[Hunk], per_hunk: bool) -> Self {
        let hunks_report = per_hunk.then(|| {
            hunks
                .iter()
                .map(|h| HunkReport {
                    orig_start_line: h.orig_start_line,
                    new_start_line: h.new_start_line,
                    stat: h.stat(),
                })
                .collect()
        });

        Self {
            name: name.into(),
            stat: file_stat(hunks),
            hunks: hunks_report,
        }
    }
}

/// Render reports in the requested format.
pub fn render(reports: &[FileReport], options: &ReportOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => Ok(render_text(reports, options.show_intervals)),
        OutputFormat::Json => serde_json::to_string_pretty(reports)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| HunkstatError::OutputError(format!("failed to serialize JSON: {}", e))),
        OutputFormat::Yaml => serde_yaml::to_string(reports)
            .map_err(|e| HunkstatError::OutputError(format!("failed to serialize YAML: {}", e))),
    }
}

fn render_text(reports: &[FileReport], show_intervals: bool) -> String {
    let mut lines = Vec::new();

    for report in reports {
        lines.push(format!("{}: {}", report.name, summary(&report.stat)));
        if show_intervals {
            push_intervals(&mut lines, "  ", &report.stat);
        }

        for (i, hunk) in report.hunks.iter().flatten().enumerate() {
            lines.push(format!(
                "  hunk {} (-{} +{}): {}",
                i + 1,
                hunk.orig_start_line,
                hunk.new_start_line,
                summary(&hunk.stat)
            ));
            if show_intervals {
                push_intervals(&mut lines, "    ", &hunk.stat);
            }
        }
    }

    if reports.len() > 1 {
        let total: Stat = reports.iter().map(|r| r.stat.clone()).sum();
        lines.push(format!("total: {}", summary(&total)));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn summary(stat: &Stat) -> String {
    format!(
        "{} added, {} deleted, {} changed",
        stat.added, stat.deleted, stat.changed
    )
}

fn push_intervals(lines: &mut Vec<String>, indent: &str, stat: &Stat) {
    if !stat.added_line_intervals.is_empty() {
        lines.push(format!(
            "{}added lines: {}",
            indent,
            stat.format_added_line_intervals()
        ));
    }
    if !stat.deleted_line_intervals.is_empty() {
        lines.push(format!(
            "{}deleted lines: {}",
            indent,
            stat.format_deleted_line_intervals()
        ));
    }
}
