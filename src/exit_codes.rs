//! Exit code constants for the feedbot CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files)
//! - 2: Assignment metadata failure
//! - 3: Submission slicing failure
//! - 4: Marker path resolution failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unreadable input file.
pub const USER_ERROR: i32 = 1;

/// Assignment metadata failure: malformed or incomplete assignment JSON.
pub const METADATA_FAILURE: i32 = 2;

/// Submission slicing failure: malformed problem boundaries in a submission.
pub const SLICE_FAILURE: i32 = 3;

/// Path resolution failure: a declared marker path is missing or malformed.
pub const PATH_FAILURE: i32 = 4;
