//! Exit code constants for the CLI application.
//!
//! Centralizes the exit codes used by the CLI so they stay consistent
//! across commands.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Interrupted by user (Ctrl+C) exit code.
#[allow(dead_code)]
pub const INTERRUPTED: i32 = 130;
