//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod clean;
mod completions;
mod generate;
mod paths;
mod utils;

pub use clean::handle_clean;
pub use completions::handle_completions;
pub use generate::handle_generate;
pub use paths::handle_paths;
pub use utils::WorkspaceContext;
