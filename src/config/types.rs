//! Configuration types and defaults for hunkstat.

use serde::{Deserialize, Serialize};

/// How reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable summary lines (default).
    #[default]
    Text,
    Json,
    Yaml,
}

/// Default limit on input size: 16 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_max_input_bytes() -> u64 {
    DEFAULT_MAX_INPUT_BYTES
}
