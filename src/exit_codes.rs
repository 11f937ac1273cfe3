//! Exit code constants for the query-config CLI.
//!
//! - 0: Success
//! - 1: User error (invalid configuration, bad query reference, missing environment)
//! - 2: I/O failure (cache or config file could not be read or written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: the configuration or the job environment is invalid.
pub const USER_ERROR: i32 = 1;

/// I/O failure: reading or writing a file failed.
pub const IO_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
