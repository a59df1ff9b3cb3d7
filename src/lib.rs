//! Hunkstat: line-level statistics for unified-diff hunks.
//!
//! Given already-parsed hunks (start lines plus raw `+`/`-`/` ` body),
//! computes how many lines were added, deleted or changed and which line
//! intervals they cover, per hunk and per file.

pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;

#[cfg(test)]
pub(crate) mod test_support;
