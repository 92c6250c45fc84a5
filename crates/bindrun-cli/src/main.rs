//! Bindrun CLI - binding-generation harness
//!
//! This is the main entry point for the Bindrun CLI, providing commands
//! for resetting the bindings output directory and driving the external
//! UniFFI PHP binding generator over a compiled fixture library.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use error::Result;
use handlers::WorkspaceContext;
use logging::LoggingConfig;
use output::OutputWriter;
use std::process;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    let result = run(cli);

    // Handle the result
    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let use_color = cli.use_color();
    let quiet = cli.quiet;
    let mut output = OutputWriter::new(cli.output, use_color, quiet);

    let Cli {
        root,
        config_file,
        command,
        ..
    } = cli;

    match command {
        // Completions need no workspace context.
        Commands::Completions(args) => handlers::handle_completions(args),
        Commands::Generate(args) => {
            let ctx = WorkspaceContext::resolve(root, config_file.as_deref())?;
            handlers::handle_generate(args, &ctx, &mut output)
        }
        Commands::Clean => {
            let ctx = WorkspaceContext::resolve(root, config_file.as_deref())?;
            handlers::handle_clean(&ctx, &mut output)
        }
        Commands::Paths => {
            let ctx = WorkspaceContext::resolve(root, config_file.as_deref())?;
            handlers::handle_paths(&ctx, &mut output)
        }
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    // Create logging configuration from CLI args and environment
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    // Initialize the logging system
    logging::init_logging(logging_config)
}
