//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the bindrun-core harness engine
    #[error("Core error: {0}")]
    Core(#[from] bindrun_core::Error),

    /// Configuration file not found
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration file exists but cannot be parsed
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // A failed generator run exits with the generator's own code.
            Self::Core(core) => match core {
                bindrun_core::Error::GeneratorFailed { .. } => {
                    core.generator_exit_code().unwrap_or(1)
                }
                bindrun_core::Error::RootResolution { .. } => 2,
                bindrun_core::Error::UnsupportedPlatform { .. } => 3,
                bindrun_core::Error::OutputReset { .. } => 4,
                bindrun_core::Error::GeneratorMissing { .. } => 5,
                bindrun_core::Error::LibraryMissing { .. } => 6,
                bindrun_core::Error::Spawn { .. } => 7,
                bindrun_core::Error::Io(_) => 1,
            },
            Self::Io(_) => 1,
            Self::ConfigNotFound { .. } => 8,
            Self::Config { .. } => 9,
            Self::Json(_) => 10,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    // Core errors carry their own step-specific phrasing; display them bare.
    if let Error::Core(core_error) = error {
        return format!("{}", core_error);
    }

    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
