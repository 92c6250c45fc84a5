//! Shared utilities for command handlers

use crate::cli::Profile;
use crate::config::Config;
use crate::error::Result;
use bindrun_core::{Layout, Platform, RootSource};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a workspace-touching handler needs: the resolved root, the
/// classified platform, and the loaded tool configuration.
pub struct WorkspaceContext {
    pub root: PathBuf,
    pub root_source: RootSource,
    pub platform: Platform,
    pub config: Config,
}

impl WorkspaceContext {
    /// Resolve the context once, before any handler runs.
    pub fn resolve(root_flag: Option<PathBuf>, config_file: Option<&Path>) -> Result<Self> {
        let (root, root_source) = bindrun_core::resolve_root(root_flag)?;
        debug!(root = %root.display(), source = ?root_source, "resolved workspace root");

        let config = Config::load_with_file(config_file, &root)?;
        let platform = Platform::detect()?;
        debug!(%platform, "classified host platform");

        Ok(Self {
            root,
            root_source,
            platform,
            config,
        })
    }

    /// Resolve the on-disk layout, applying optional command-line overrides.
    pub fn layout(&self, profile: Option<Profile>, library: Option<&str>) -> Layout {
        Layout::resolve(
            self.root.clone(),
            self.platform,
            &self.config.layout_config(profile, library),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_flag_shapes_the_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = WorkspaceContext::resolve(Some(tmp.path().to_path_buf()), None).unwrap();

        assert_eq!(ctx.root, tmp.path());
        assert_eq!(ctx.root_source, RootSource::Explicit);

        let layout = ctx.layout(None, None);
        assert_eq!(layout.bindings_dir, tmp.path().join("out"));
        assert_eq!(layout.bindgen_config, tmp.path().join("fixtures/uniffi.toml"));
    }

    #[test]
    fn config_file_in_the_root_is_picked_up() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("bindrun.toml"),
            "[generator]\nprofile = \"release\"\n",
        )
        .unwrap();

        let ctx = WorkspaceContext::resolve(Some(tmp.path().to_path_buf()), None).unwrap();
        let layout = ctx.layout(None, None);
        assert_eq!(layout.binaries_dir, tmp.path().join("target/release"));
    }
}
