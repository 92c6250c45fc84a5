//! Error types for the Bindrun core library
//!
//! One variant per failing step of the pipeline. Every failure aborts the
//! run; nothing is caught or retried above this taxonomy.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Bindrun operations
#[derive(Error, Debug)]
pub enum Error {
    /// The workspace root could not be determined
    #[error("Cannot resolve workspace root: {message}")]
    RootResolution { message: String },

    /// The host (or requested) platform is outside the recognized set
    #[error("Unsupported platform '{identifier}' (supported: macos, linux)")]
    UnsupportedPlatform { identifier: String },

    /// The bindings output directory could not be removed or recreated
    #[error("Cannot reset output directory {}: {source}", path.display())]
    OutputReset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The binding-generator executable is not where the layout expects it
    #[error("Binding generator not found at {}", path.display())]
    GeneratorMissing { path: PathBuf },

    /// The compiled shared library is not where the layout expects it
    #[error("Shared library not found at {} (build the fixture library first)", path.display())]
    LibraryMissing { path: PathBuf },

    /// The binding generator could not be spawned
    #[error("Failed to spawn {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The binding generator ran but exited non-zero
    #[error("Binding generator exited with {status}")]
    GeneratorFailed { status: ExitStatus },

    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a root-resolution error
    pub fn root_resolution(message: impl Into<String>) -> Self {
        Self::RootResolution {
            message: message.into(),
        }
    }

    /// Exit code of the failed generator, when it exited with one
    pub fn generator_exit_code(&self) -> Option<i32> {
        match self {
            Self::GeneratorFailed { status } => status.code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_names_the_identifier() {
        let err = Error::UnsupportedPlatform {
            identifier: "windows".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("windows"));
        assert!(message.contains("macos"));
    }

    #[test]
    fn generator_exit_code_only_set_for_generator_failures() {
        let err = Error::root_resolution("no executable path");
        assert_eq!(err.generator_exit_code(), None);
    }
}
