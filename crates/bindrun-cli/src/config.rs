//! Configuration management for the CLI
//!
//! Settings merge in order: built-in defaults, then an optional
//! `bindrun.toml` in the workspace root, then command-line flags.

use crate::cli::Profile;
use crate::error::{Error, Result};
use bindrun_core::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Default-location file names probed in the workspace root, in order.
const DEFAULT_CONFIG_NAMES: [&str; 2] = ["bindrun.toml", ".bindrun.toml"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generator settings
    pub generator: GeneratorConfig,

    /// Path settings
    pub paths: PathsConfig,
}

/// Binding-generator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Executable name looked up in the binaries directory
    pub tool: String,

    /// Shared-library stem metadata is extracted from
    pub library: String,

    /// Cargo profile the artifacts were compiled with
    pub profile: String,
}

/// Path settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Bindings output directory, relative to the workspace root
    pub out_dir: String,

    /// Generator configuration forwarded via --config, relative to the root
    pub bindgen_config: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tool: "uniffi-bindgen-php".to_string(),
            library: "uniffi_fixtures".to_string(),
            profile: "debug".to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            out_dir: "out".to_string(),
            bindgen_config: "fixtures/uniffi.toml".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from the default locations in the workspace root
    pub fn load(root: &Path) -> Result<Self> {
        for name in DEFAULT_CONFIG_NAMES {
            let path = root.join(name);
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "skipping unreadable config file");
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or the default locations
    pub fn load_with_file(file: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load(root)
        }
    }

    /// Apply command-line overrides and lower into the core layout settings.
    pub fn layout_config(&self, profile: Option<Profile>, library: Option<&str>) -> LayoutConfig {
        LayoutConfig {
            out_dir: self.paths.out_dir.clone(),
            profile: profile
                .map(|p| p.as_str().to_string())
                .unwrap_or_else(|| self.generator.profile.clone()),
            library_stem: library
                .map(str::to_string)
                .unwrap_or_else(|| self.generator.library.clone()),
            generator_name: self.generator.tool.clone(),
            bindgen_config: self.paths.bindgen_config.clone(),
        }
    }
}
