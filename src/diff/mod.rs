//! Line statistics for unified-diff hunks.
//!
//! This module turns already-parsed hunks into added/deleted/changed
//! counts plus the line intervals they touch:
//! - `Hunk::stat` scans one hunk body
//! - `FileDiff::stat` sums the hunks of one file
//! - `format_intervals` renders intervals as `"5, 7-9"`
//!
//! Parsing unified-diff text is left to the caller; hunks arrive with
//! their start lines and body already extracted, either built in code or
//! loaded from a JSON/YAML document.

mod format;
mod interval;
mod io;
mod model;
mod stat;


// Re-export public API
pub use format::format_intervals;
pub use interval::IntervalTracker;
pub use io::{InputFormat, load_file_diffs, parse_file_diffs, read_body};
pub use model::{FileDiff, Hunk, LineInterval, Stat};
pub use stat::{file_stat, stat_body};
