//! Error types for the CLI application.
//!
//! Defines the error types used throughout the CLI for error propagation
//! with the `?` operator. Collaborator failures (sound playback, camera
//! stand-ins) are warned about at the boundary and never surface here;
//! `CliError` covers user input, configuration, and I/O problems.

use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdin/stdout/stderr, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),

    /// Operation was interrupted (e.g., by user with Ctrl+C)
    #[allow(dead_code)]
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<rochambot_engine::errors::EngineError> for CliError {
    fn from(error: rochambot_engine::errors::EngineError) -> Self {
        CliError::Engine(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_prefix() {
        let e = CliError::InvalidInput("five flags required".to_string());
        assert_eq!(e.to_string(), "Invalid input: five flags required");
        let e = CliError::Config("win_threshold must be >= 1".to_string());
        assert!(e.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn io_errors_convert_and_keep_a_source() {
        let io = std::io::Error::other("disk on fire");
        let e: CliError = io.into();
        assert!(std::error::Error::source(&e).is_some());
    }
}
