//! Workspace layout resolution
//!
//! Every path the harness touches derives from a single root directory.
//! The root itself resolves with an ordered precedence: an explicit
//! override, then the `BINDRUN_ROOT` environment variable, then a default
//! derived from the running executable's location. Path composition never
//! consults the current working directory.

use crate::error::{Error, Result};
use crate::platform::Platform;
use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the workspace root.
pub const ROOT_ENV: &str = "BINDRUN_ROOT";

/// Where the resolved root directory came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootSource {
    /// Supplied directly (command-line flag or API argument)
    Explicit,
    /// Taken from the `BINDRUN_ROOT` environment variable
    Environment,
    /// Derived from the running executable's location
    Executable,
}

/// Settings that shape the derived layout.
///
/// Defaults match the fixture workspace this harness was built for: a
/// `uniffi-bindgen-php` executable and a `libuniffi_fixtures` artifact in
/// `target/debug`, bindings written to `out`, generator configuration in
/// `fixtures/uniffi.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Output directory name, relative to the root
    pub out_dir: String,
    /// Cargo profile the artifacts were compiled with
    pub profile: String,
    /// Shared-library stem (without `lib` prefix or extension)
    pub library_stem: String,
    /// Binding-generator executable name, looked up in the binaries directory
    pub generator_name: String,
    /// Generator configuration file forwarded via `--config`, relative to the root
    pub bindgen_config: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            out_dir: "out".to_string(),
            profile: "debug".to_string(),
            library_stem: "uniffi_fixtures".to_string(),
            generator_name: "uniffi-bindgen-php".to_string(),
            bindgen_config: "fixtures/uniffi.toml".to_string(),
        }
    }
}

/// Fully resolved set of paths for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Base directory every other path derives from
    pub root: PathBuf,
    /// Directory the generator writes bindings into
    pub bindings_dir: PathBuf,
    /// Directory holding the compiled artifacts
    pub binaries_dir: PathBuf,
    /// Compiled shared library the generator reads metadata from
    pub library_file: PathBuf,
    /// Binding-generator executable
    pub generator: PathBuf,
    /// Configuration file forwarded to the generator verbatim
    pub bindgen_config: PathBuf,
}

impl Layout {
    /// Compute the layout for a root directory and platform.
    pub fn resolve(root: PathBuf, platform: Platform, config: &LayoutConfig) -> Self {
        let binaries_dir = root.join("target").join(&config.profile);
        Self {
            bindings_dir: root.join(&config.out_dir),
            library_file: binaries_dir.join(platform.shared_library_name(&config.library_stem)),
            generator: binaries_dir.join(&config.generator_name),
            bindgen_config: root.join(&config.bindgen_config),
            binaries_dir,
            root,
        }
    }
}

/// Resolve the workspace root from the ambient environment.
///
/// Precedence, most specific first: the `explicit` argument, then
/// `BINDRUN_ROOT`, then a default derived from the running executable's
/// location.
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<(PathBuf, RootSource)> {
    let env_override = std::env::var_os(ROOT_ENV).map(PathBuf::from);
    let current_exe = std::env::current_exe().ok();
    resolve_root_from(explicit, env_override, current_exe.as_deref())
}

/// Pure precedence resolution; `resolve_root` gathers the ambient inputs.
pub fn resolve_root_from(
    explicit: Option<PathBuf>,
    env_override: Option<PathBuf>,
    current_exe: Option<&Path>,
) -> Result<(PathBuf, RootSource)> {
    if let Some(root) = explicit {
        return Ok((root, RootSource::Explicit));
    }
    if let Some(root) = env_override {
        return Ok((root, RootSource::Environment));
    }

    let exe = current_exe
        .ok_or_else(|| Error::root_resolution("cannot locate the running executable"))?;
    let root = root_from_exe(exe).ok_or_else(|| {
        Error::root_resolution(format!(
            "executable path {} has no parent directory",
            exe.display()
        ))
    })?;
    Ok((root, RootSource::Executable))
}

/// Derive the root from an executable path: its containing directory,
/// with a trailing `target/<profile>` stripped when the binary runs out
/// of a Cargo target directory.
fn root_from_exe(exe: &Path) -> Option<PathBuf> {
    let dir = exe.parent()?;
    if let Some(target_dir) = dir.parent() {
        if target_dir.file_name() == Some(OsStr::new("target")) {
            if let Some(root) = target_dir.parent() {
                return Some(root.to_path_buf());
            }
        }
    }
    Some(dir.to_path_buf())
}
