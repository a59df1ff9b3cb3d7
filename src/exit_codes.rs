//! Exit code constants for the hunkstat CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Input failure (unreadable or malformed document/body)
//! - 3: Output failure (serialization or write error)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Input failure: the diff document or hunk body could not be read or parsed.
pub const INPUT_FAILURE: i32 = 2;

/// Output failure: the report could not be serialized or written.
pub const OUTPUT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, INPUT_FAILURE, OUTPUT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
