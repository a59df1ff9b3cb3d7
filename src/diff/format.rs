//! Compact textual rendering of line intervals.

use super::model::{LineInterval, Stat};
use std::fmt;

impl fmt::Display for LineInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Render intervals as `"5, 7-9"`: single-line runs as their number, longer
/// runs as `start-end`, joined by `", "`. An empty slice renders as `""`.
pub fn format_intervals(intervals: &[LineInterval]) -> String {
    intervals
        .iter()
        .map(LineInterval::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Stat {
    pub fn format_added_line_intervals(&self) -> String {
        format_intervals(&self.added_line_intervals)
    }

    pub fn format_deleted_line_intervals(&self) -> String {
        format_intervals(&self.deleted_line_intervals)
    }
}
