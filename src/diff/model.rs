//! Value types for parsed diffs and their statistics.

use serde::{Deserialize, Serialize};

/// One hunk of a file diff, as produced by an upstream unified-diff parser.
///
/// Only `orig_start_line`, `new_start_line` and `body` take part in
/// statistics; the remaining header metadata is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hunk {
    /// First line number in the old file covered by this hunk.
    pub orig_start_line: usize,
    /// Number of old-file lines in the hunk range.
    pub orig_lines: usize,
    /// First line number in the new file covered by this hunk.
    pub new_start_line: usize,
    /// Number of new-file lines in the hunk range.
    pub new_lines: usize,
    /// Text following the closing `@@` of the hunk header (may be empty).
    pub section: String,
    /// Line offset of the hunk header within its file diff.
    pub start_position: usize,
    /// Raw hunk body: `\n`-separated lines prefixed with ' ', '+' or '-'.
    pub body: String,
}

impl Hunk {
    /// Create a hunk from its start lines and body, leaving the rest of the
    /// header metadata empty.
    pub fn new(orig_start_line: usize, new_start_line: usize, body: impl Into<String>) -> Self {
        Self {
            orig_start_line,
            new_start_line,
            body: body.into(),
            ..Self::default()
        }
    }
}

/// The diff of a single file: its names, extended headers and hunks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiff {
    /// Name of the old file (e.g. `a/src/lib.rs`).
    pub orig_name: String,
    /// Name of the new file (e.g. `b/src/lib.rs`).
    pub new_name: String,
    /// Extended header lines such as `index abc..def 100644`.
    pub extended: Vec<String>,
    pub hunks: Vec<Hunk>,
}

impl FileDiff {
    /// Name used when reporting on this file: the new name, falling back to
    /// the old one for deletions.
    pub fn display_name(&self) -> &str {
        if self.new_name.is_empty() || self.new_name == "/dev/null" {
            &self.orig_name
        } else {
            &self.new_name
        }
    }
}

/// Inclusive range of line numbers touched by one run of added or deleted
/// lines. `start == end` for a single-line run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInterval {
    pub start: usize,
    pub end: usize,
}

impl LineInterval {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Line statistics for a hunk or a whole file diff.
///
/// `added + changed` is the number of `+` lines seen and `deleted + changed`
/// the number of `-` lines; each changed line is an adjacent `-`/`+` pair.
/// Added intervals are in new-file coordinates, deleted intervals in
/// old-file coordinates, both in the order they were encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub added: usize,
    pub deleted: usize,
    pub changed: usize,
    pub added_line_intervals: Vec<LineInterval>,
    pub deleted_line_intervals: Vec<LineInterval>,
}
