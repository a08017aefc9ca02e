//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range | Domain    | Description                              |
//! |-------|-----------|------------------------------------------|
//! | 0     | Universal | Success                                  |
//! | 1     | Universal | General error (unspecified)              |
//! | 2     | Universal | CLI usage error (bad args, missing file) |
//! | 3-9   | compile   | Archive compilation codes                |
//!
//! One deliberate exception to the contract: a failure while WRITING the
//! compiled output is reported on stderr but still exits 0 (report, no
//! retry, no distinct signal).

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
#[allow(dead_code)]
pub const EXIT_USAGE: u8 = 2;

/// Config failed to parse or validate.
pub const EXIT_COMPILE_INVALID_CONFIG: u8 = 3;

/// A year's source document could not be read.
pub const EXIT_COMPILE_READ: u8 = 4;

/// A year's source document could not be parsed.
pub const EXIT_COMPILE_PARSE: u8 = 5;
