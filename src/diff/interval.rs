//! Tracking of the currently open run of added or deleted lines.

use super::model::LineInterval;

/// Holds at most one open interval and grows it as consecutive
/// same-sign lines are seen.
#[derive(Debug, Default)]
pub struct IntervalTracker {
    current: Option<LineInterval>,
}

impl IntervalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pos` as part of the current run, opening a run if none is open.
    ///
    /// Callers feed positions in increasing order, once per line of the run.
    pub fn update_line(&mut self, pos: usize) {
        match &mut self.current {
            Some(interval) => interval.end = pos,
            None => self.current = Some(LineInterval::new(pos, pos)),
        }
    }

    /// Close the current run, appending it to `into`. No-op when nothing is open.
    pub fn flush(&mut self, into: &mut Vec<LineInterval>) {
        if let Some(interval) = self.current.take() {
            into.push(interval);
        }
    }

    /// Whether a run is currently open.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_opens_then_extends() {
        let mut tracker = IntervalTracker::new();
        tracker.update_line(4);
        tracker.update_line(5);
        tracker.update_line(6);

        let mut out = Vec::new();
        tracker.flush(&mut out);
        assert_eq!(out, vec![LineInterval::new(4, 6)]);
        assert!(!tracker.is_open());
    }

    #[test]
    fn flush_without_open_interval_is_noop() {
        let mut tracker = IntervalTracker::new();
        let mut out = vec![LineInterval::new(1, 1)];
        tracker.flush(&mut out);
        tracker.flush(&mut out);
        assert_eq!(out, vec![LineInterval::new(1, 1)]);
    }

    #[test]
    fn flush_resets_for_next_run() {
        let mut tracker = IntervalTracker::new();
        let mut out = Vec::new();
        tracker.update_line(2);
        tracker.flush(&mut out);
        tracker.update_line(9);
        tracker.update_line(10);
        tracker.flush(&mut out);
        assert_eq!(out, vec![LineInterval::new(2, 2), LineInterval::new(9, 10)]);
    }
}
