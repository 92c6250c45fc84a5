//! Bindings output directory lifecycle

use crate::error::{Error, Result};
use std::io;
use std::path::Path;
use tracing::debug;

/// Remove `path` recursively if present, then create it fresh (with any
/// missing parents).
///
/// Idempotent for any prior state: absent, empty, or populated. Running
/// it twice in a row ends in the same empty-directory state.
pub fn reset(path: &Path) -> Result<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => debug!(path = %path.display(), "removed stale output directory"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(Error::OutputReset {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    std::fs::create_dir_all(path).map_err(|source| Error::OutputReset {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "created empty output directory");
    Ok(())
}
