//! Host platform classification
//!
//! The platform determines the shared-library extension the harness looks
//! for. Classification happens once at startup against a closed set of
//! recognized tags; anything else is an explicit error rather than a
//! silent fallback.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Recognized host platforms
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Linux,
}

impl Platform {
    /// Classify the host platform from the standard OS constant.
    pub fn detect() -> Result<Self> {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Classify an explicit platform identifier.
    ///
    /// Accepts bare OS tags (`macos`, `darwin`, `linux`) as well as
    /// `os-arch` style identifiers such as `darwin-arm64`, classifying by
    /// the leading OS component.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        let tag = identifier
            .split('-')
            .next()
            .unwrap_or(identifier)
            .to_ascii_lowercase();

        match tag.as_str() {
            "macos" | "darwin" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            _ => Err(Error::UnsupportedPlatform {
                identifier: identifier.to_string(),
            }),
        }
    }

    /// File extension of shared libraries on this platform.
    pub fn shared_library_extension(self) -> &'static str {
        match self {
            Self::MacOs => "dylib",
            Self::Linux => "so",
        }
    }

    /// Conventional shared-library file name for a library stem,
    /// e.g. `uniffi_fixtures` becomes `libuniffi_fixtures.so` on Linux.
    pub fn shared_library_name(self, stem: &str) -> String {
        format!("lib{}.{}", stem, self.shared_library_extension())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
        }
    }
}
