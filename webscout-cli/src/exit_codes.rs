//! Exit codes for CLI commands

/// Command completed successfully
pub const EXIT_SUCCESS: i32 = 0;

/// Command completed but encountered warnings
pub const EXIT_WARNING: i32 = 1;

/// Command failed
pub const EXIT_ERROR: i32 = 2;
