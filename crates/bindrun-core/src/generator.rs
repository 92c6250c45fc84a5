//! The generation pipeline
//!
//! Artifact checks, output-directory reset, generator invocation. Each
//! step returns `Result` and the pipeline stops at the first failure;
//! no step runs after a failed one.

use crate::error::{Error, Result};
use crate::invoke::Invocation;
use crate::layout::Layout;
use crate::outdir;
use tracing::info;

/// Drives one generation run over a resolved layout.
#[derive(Debug, Clone)]
pub struct Generator {
    layout: Layout,
}

impl Generator {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The command this run would execute.
    pub fn invocation(&self) -> Invocation {
        Invocation::for_generator(&self.layout)
    }

    /// Verify the on-disk artifacts this run depends on.
    pub fn check_artifacts(&self) -> Result<()> {
        if !self.layout.generator.is_file() {
            return Err(Error::GeneratorMissing {
                path: self.layout.generator.clone(),
            });
        }
        if !self.layout.library_file.is_file() {
            return Err(Error::LibraryMissing {
                path: self.layout.library_file.clone(),
            });
        }
        Ok(())
    }

    /// Run the pipeline: check artifacts, reset the output directory,
    /// invoke the generator, surface its exit status.
    pub fn run(&self) -> Result<()> {
        self.check_artifacts()?;
        outdir::reset(&self.layout.bindings_dir)?;

        let invocation = self.invocation();
        info!(command = %invocation.display(), "invoking binding generator");
        let status = invocation.status()?;
        if !status.success() {
            return Err(Error::GeneratorFailed { status });
        }

        info!(out_dir = %self.layout.bindings_dir.display(), "bindings generated");
        Ok(())
    }
}
