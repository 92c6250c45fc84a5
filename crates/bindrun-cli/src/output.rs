//! Output formatting and writing utilities
//!
//! Human-readable or JSON output with color handling, quiet suppression,
//! and a progress spinner for the external generator run.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: !quiet && io::stdout().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[cfg(test)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            show_progress: false, // No progress bars with custom writers
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(message)
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        // Human output falls back to pretty JSON for structured values.
        let formatted = serde_json::to_string_pretty(value)?;
        self.writeln(&formatted)
    }

    /// Spinner shown while the external generator runs; `None` when
    /// output is quiet, redirected, or not a terminal.
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(80));
        pb.set_message(message.to_string());
        Some(pb)
    }
}

#[cfg(test)]
mod tests;
