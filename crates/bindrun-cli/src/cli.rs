//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bindrun - binding-generation harness for UniFFI fixture workspaces
///
/// Resets the bindings output directory and drives the external
/// `uniffi-bindgen-php` executable over a compiled fixture library,
/// forwarding its configuration file unchanged.
#[derive(Parser, Debug)]
#[command(
    name = "bindrun",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Workspace root (overrides BINDRUN_ROOT and the derived default)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path to a bindrun.toml configuration file
    #[arg(short, long, global = true, env = "BINDRUN_CONFIG", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reset the bindings directory and run the binding generator
    Generate(GenerateArgs),

    /// Remove and recreate the bindings directory without generating
    Clean,

    /// Print the resolved workspace layout
    Paths,

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Cargo profile the artifacts were compiled with
    #[arg(short, long, value_enum)]
    pub profile: Option<Profile>,

    /// Stem of the shared library to read metadata from
    #[arg(short, long, value_name = "STEM")]
    pub library_name: Option<String>,

    /// Print the resolved command without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// Pretty-printed JSON output
    Json,
}

/// Cargo build profiles the harness knows how to locate artifacts for
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Unoptimized artifacts in target/debug
    Debug,
    /// Optimized artifacts in target/release
    Release,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && atty::is(atty::Stream::Stdout)
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["bindrun", "-vv", "generate"]);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet = Cli::parse_from(["bindrun", "--quiet", "generate"]);
        assert_eq!(quiet.verbosity_level(), 0);
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::parse_from([
            "bindrun",
            "generate",
            "--profile",
            "release",
            "--library-name",
            "uniffi_demo",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.profile, Some(Profile::Release));
                assert_eq!(args.library_name.as_deref(), Some("uniffi_demo"));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_root_flag_is_global() {
        let cli = Cli::parse_from(["bindrun", "paths", "--root", "/proj"]);
        assert_eq!(cli.root.as_deref(), Some(std::path::Path::new("/proj")));
    }
}
