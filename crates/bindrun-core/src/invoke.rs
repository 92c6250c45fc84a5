//! Binding-generator process invocation
//!
//! The command is held as data so the argument vector can be inspected or
//! printed (dry runs, logs) before anything is spawned.

use crate::error::{Error, Result};
use crate::layout::Layout;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// A fully constructed external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Invocation {
    /// The fixed argument contract of the binding generator:
    /// `<lib_file> --out-dir <bindings_dir> --library --config <config_file>`,
    /// in exactly that order.
    pub fn for_generator(layout: &Layout) -> Self {
        Self {
            program: layout.generator.clone(),
            args: vec![
                layout.library_file.clone().into_os_string(),
                OsString::from("--out-dir"),
                layout.bindings_dir.clone().into_os_string(),
                OsString::from("--library"),
                OsString::from("--config"),
                layout.bindgen_config.clone().into_os_string(),
            ],
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Render the command line for display.
    pub fn display(&self) -> String {
        let mut rendered = self.program.display().to_string();
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(&arg.to_string_lossy());
        }
        rendered
    }

    /// Spawn the program, wait for it, and return its exit status.
    pub fn status(&self) -> Result<ExitStatus> {
        Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}
