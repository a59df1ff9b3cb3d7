//! Line classification, change pairing and aggregation of hunk statistics.

use std::iter::Sum;
use std::ops::AddAssign;

use super::interval::IntervalTracker;
use super::model::{FileDiff, Hunk, Stat};

/// Marker of an added or deleted body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Added,
    Deleted,
}

impl Sign {
    fn of(first: u8) -> Option<Self> {
        match first {
            b'+' => Some(Sign::Added),
            b'-' => Some(Sign::Deleted),
            _ => None,
        }
    }
}

impl Hunk {
    /// Compute the added/deleted/changed statistics of this hunk.
    ///
    /// A deletion immediately followed by an addition (or the reverse) is
    /// counted as one changed line. Intervals are recorded for every `+`/`-`
    /// line regardless of pairing.
    pub fn stat(&self) -> Stat {
        stat_body(self.orig_start_line, self.new_start_line, self.body.as_bytes())
    }
}

impl FileDiff {
    /// Sum of the statistics of every hunk, intervals concatenated in hunk order.
    pub fn stat(&self) -> Stat {
        file_stat(&self.hunks)
    }
}

/// Sum the statistics of `hunks`. Intervals are concatenated in hunk order
/// and never merged across hunk boundaries.
pub fn file_stat(hunks: &[Hunk]) -> Stat {
    let total: Stat = hunks.iter().map(Hunk::stat).sum();
    log::debug!(
        "aggregated {} hunks: +{} -{} ~{}",
        hunks.len(),
        total.added,
        total.deleted,
        total.changed
    );
    total
}

/// Scan a raw hunk body whose first line sits at the given old/new file
/// line numbers.
///
/// Lines are split on `\n` only. An empty line closes any open run and
/// clears the pairing state without being counted, so `"+a\n\n+b"` yields
/// two intervals rather than one run spanning the blank line.
///
/// Start lines near `usize::MAX` saturate instead of overflowing.
pub fn stat_body(orig_start_line: usize, new_start_line: usize, body: &[u8]) -> Stat {
    let mut scanner = Scanner::new(orig_start_line, new_start_line);
    for (index, line) in body.split(|&b| b == b'\n').enumerate() {
        scanner.scan_line(index, line);
    }
    scanner.finish()
}

struct Scanner {
    orig_start_line: usize,
    new_start_line: usize,
    stat: Stat,
    added: IntervalTracker,
    deleted: IntervalTracker,
    /// Sign of the previous line while it can still pair; cleared once consumed.
    pair_flag: Option<Sign>,
    /// Sign of the previous non-empty line; decides whether a run continues.
    raw_flag: Option<Sign>,
}

impl Scanner {
    fn new(orig_start_line: usize, new_start_line: usize) -> Self {
        Self {
            orig_start_line,
            new_start_line,
            stat: Stat::default(),
            added: IntervalTracker::new(),
            deleted: IntervalTracker::new(),
            pair_flag: None,
            raw_flag: None,
        }
    }

    fn scan_line(&mut self, index: usize, line: &[u8]) {
        let Some(&first) = line.first() else {
            self.reset();
            return;
        };

        let sign = Sign::of(first);

        if sign == Some(Sign::Added) {
            let new_pos = self.position(self.new_start_line, index, self.stat.deleted);
            self.added.update_line(new_pos);
        } else if self.raw_flag == Some(Sign::Added) {
            self.added.flush(&mut self.stat.added_line_intervals);
        }

        if sign == Some(Sign::Deleted) {
            let orig_pos = self.position(self.orig_start_line, index, self.stat.added);
            self.deleted.update_line(orig_pos);
        } else if self.raw_flag == Some(Sign::Deleted) {
            self.deleted.flush(&mut self.stat.deleted_line_intervals);
        }

        match sign {
            Some(Sign::Added) => {
                if self.pair_flag == Some(Sign::Deleted) {
                    self.stat.deleted -= 1;
                    self.stat.changed += 1;
                    // already part of a change, cannot pair again
                    self.pair_flag = None;
                } else {
                    self.stat.added += 1;
                    self.pair_flag = Some(Sign::Added);
                }
            }
            Some(Sign::Deleted) => {
                if self.pair_flag == Some(Sign::Added) {
                    self.stat.added -= 1;
                    self.stat.changed += 1;
                    self.pair_flag = None;
                } else {
                    self.stat.deleted += 1;
                    self.pair_flag = Some(Sign::Deleted);
                }
            }
            None => self.pair_flag = None,
        }

        self.raw_flag = sign;
    }

    /// Line number of body line `index` in one file, skipping the lines
    /// (`absent` plus changed pairs) that file does not contain.
    fn position(&self, start_line: usize, index: usize, absent: usize) -> usize {
        // added + deleted + 2 * changed counts the +/- lines before `index`,
        // so the subtraction never goes below the start line.
        start_line.saturating_add(index) - absent - self.stat.changed
    }

    fn reset(&mut self) {
        self.flush();
        self.pair_flag = None;
        self.raw_flag = None;
    }

    fn flush(&mut self) {
        self.added.flush(&mut self.stat.added_line_intervals);
        self.deleted.flush(&mut self.stat.deleted_line_intervals);
    }

    fn finish(mut self) -> Stat {
        self.flush();
        log::trace!(
            "hunk at -{} +{}: {:?}",
            self.orig_start_line,
            self.new_start_line,
            self.stat
        );
        self.stat
    }
}

impl Stat {
    /// Fold `other` into this stat: counts are summed and its intervals
    /// appended after ours.
    pub fn add(&mut self, other: Stat) {
        self.added += other.added;
        self.deleted += other.deleted;
        self.changed += other.changed;
        self.added_line_intervals.extend(other.added_line_intervals);
        self.deleted_line_intervals.extend(other.deleted_line_intervals);
    }

    /// Total number of lines touched, counting a changed pair once.
    pub fn total(&self) -> usize {
        self.added + self.deleted + self.changed
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
            && self.added_line_intervals.is_empty()
            && self.deleted_line_intervals.is_empty()
    }
}

impl AddAssign for Stat {
    fn add_assign(&mut self, other: Stat) {
        self.add(other);
    }
}

impl Sum for Stat {
    fn sum<I: Iterator<Item = Stat>>(iter: I) -> Self {
        iter.fold(Stat::default(), |mut total, stat| {
            total.add(stat);
            total
        })
    }
}
