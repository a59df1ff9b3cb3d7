//! Configuration model for hunkstat.
//!
//! This module defines the Config struct read from an optional YAML file
//! (`--config PATH`). It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults for every field, and validation.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::OutputFormat;
