//! Process exit codes.

/// Run finished, or the user picked no folder.
pub const OK: i32 = 0;
/// Bad root, walk error, or a file that could not be removed.
pub const FAILED: i32 = 1;
