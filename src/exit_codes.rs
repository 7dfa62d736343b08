//! Exit code constants for the fpreport CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad input data, bad config)
//! - 2: Template error (placeholder contract violated)
//! - 3: Compile failure (external typesetter failed)
//! - 4: I/O failure (artifact could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed input or configuration.
pub const USER_ERROR: i32 = 1;

/// Template error: a placeholder is missing or repeated.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Compile failure: the typesetter exited non-zero or could not be started.
pub const COMPILE_FAILURE: i32 = 3;

/// I/O failure: reading or writing report files failed.
pub const IO_FAILURE: i32 = 4;
