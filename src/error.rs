//! Error handling module for debsetup
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the library should use these types for consistency. Nothing
//! in the pipeline recovers from an error: the first failure aborts the run.

use thiserror::Error;

/// Main error type for debsetup
#[derive(Error, Debug)]
pub enum SetupError {
    /// IO errors (file operations, directory creation, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A command could not be spawned at all (missing binary, permissions)
    #[error("failed to spawn {program}: {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A command ran and exited with a non-zero status
    #[error("{program} exited with status {code}")]
    CommandFailed { program: String, code: i32 },

    /// A command was terminated by a signal before it could exit
    #[error("{program} was terminated by a signal")]
    CommandSignaled { program: String },

    /// `/etc/os-release` is missing, unreadable, or lacks a required field
    #[error("os-release error: {0}")]
    OsRelease(String),

    /// A required environment variable is not set
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Configuration file errors (loading, validation)
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Preflight found binaries missing from PATH
    #[error("missing required tools: {0}")]
    MissingTools(String),
}

/// Result type alias for debsetup operations
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let err = SetupError::CommandFailed {
            program: "apt-get".to_string(),
            code: 100,
        };
        assert_eq!(err.to_string(), "apt-get exited with status 100");
    }

    #[test]
    fn test_missing_env_display() {
        let err = SetupError::MissingEnv("HOME");
        assert_eq!(err.to_string(), "environment variable HOME is not set");
    }
}
