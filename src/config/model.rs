//! Config struct definition and default implementation.

use super::types::*;
use crate::diff::InputFormat;
use serde::{Deserialize, Serialize};

/// Configuration for hunkstat reports.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report format.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether text reports list the added/deleted line intervals.
    #[serde(default = "default_true")]
    pub show_intervals: bool,

    /// Whether reports include the statistics of each hunk.
    #[serde(default)]
    pub per_hunk: bool,

    /// Encoding of input documents.
    #[serde(default)]
    pub input_format: InputFormat,

    /// Inputs larger than this many bytes are rejected before parsing.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            show_intervals: true,
            per_hunk: false,
            input_format: InputFormat::default(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}
