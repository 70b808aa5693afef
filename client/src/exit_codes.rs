//! Process exit codes for the `pmadmin` binary

/// Command completed successfully
pub const SUCCESS: i32 = 0;

/// Command failed (request error, missing session, backend unreachable)
pub const FAILURE: i32 = 1;

/// Invalid usage (empty required input)
pub const USAGE: i32 = 2;
