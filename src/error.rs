//! Error types for hunkstat.
//!
//! Uses thiserror for derive macros. Statistics themselves never fail;
//! errors come from configuration, input documents and output.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for hunkstat operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum HunkstatError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// An input document or hunk body could not be read or parsed.
    #[error("{0}")]
    InputError(String),

    /// Rendering or writing the report failed.
    #[error("Output failed: {0}")]
    OutputError(String),
}

impl HunkstatError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HunkstatError::UserError(_) => exit_codes::USER_ERROR,
            HunkstatError::InputError(_) => exit_codes::INPUT_FAILURE,
            HunkstatError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for hunkstat operations.
pub type Result<T> = std::result::Result<T, HunkstatError>;
