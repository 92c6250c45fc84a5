//! Bindrun Core - harness engine for driving a UniFFI binding generator
//!
//! This crate provides the engine behind the `bindrun` CLI: it classifies
//! the host platform, resolves every path of a fixture workspace from a
//! single root directory, resets the bindings output directory, and runs
//! the external binding-generator executable with its fixed argument
//! contract.
//!
//! # Main Components
//!
//! - **Error Handling**: failure taxonomy using `thiserror`, one variant
//!   per failing step of the pipeline
//! - **Platform Classification**: a closed set of recognized platforms,
//!   resolved once at startup
//! - **Layout Resolution**: root-directory precedence and derived paths
//! - **Generation Pipeline**: artifact checks, output reset, and generator
//!   invocation with fail-fast semantics
//!
//! # Example
//!
//! ```no_run
//! use bindrun_core::{Generator, Layout, LayoutConfig, Platform, Result};
//!
//! fn example() -> Result<()> {
//!     let (root, _source) = bindrun_core::resolve_root(None)?;
//!     let layout = Layout::resolve(root, Platform::detect()?, &LayoutConfig::default());
//!     Generator::new(layout).run()
//! }
//! ```

pub mod error;
pub mod generator;
pub mod invoke;
pub mod layout;
pub mod outdir;
pub mod platform;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use generator::Generator;
pub use invoke::Invocation;
pub use layout::{resolve_root, Layout, LayoutConfig, RootSource, ROOT_ENV};
pub use platform::Platform;
