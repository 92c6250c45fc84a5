//! Logging setup for the Bindrun CLI
//!
//! Structured logging via `tracing`: the level derives from the verbosity
//! flags, `RUST_LOG` takes precedence when set, and the output format can
//! be switched to JSON through the environment.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format: compact or json
    pub format: LogFormat,
    /// Include file and line numbers
    pub source_location: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact format for interactive use
    Compact,
    /// JSON structured format
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let mut config = Self::default();

        match verbosity {
            0 => {
                config.level = "warn".to_string();
            }
            1 => {
                config.level = "info".to_string();
            }
            2 => {
                config.level = "debug".to_string();
                config.source_location = true;
            }
            _ => {
                config.level = "trace".to_string();
                config.source_location = true;
            }
        }

        config
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        // RUST_LOG takes precedence
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }

        // BINDRUN_LOG_FORMAT
        if let Ok(format) = std::env::var("BINDRUN_LOG_FORMAT") {
            match format.to_lowercase().as_str() {
                "compact" => self.format = LogFormat::Compact,
                "json" => self.format = LogFormat::Json,
                _ => eprintln!("Invalid log format: {}, using default", format),
            }
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Use different subscriber based on format to avoid type conflicts
    match config.format {
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_writer(std::io::stderr)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .compact()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .json()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_from_verbosity() {
        let config = LoggingConfig::from_verbosity(0);
        assert_eq!(config.level, "warn");
        assert!(!config.source_location);

        let config = LoggingConfig::from_verbosity(1);
        assert_eq!(config.level, "info");

        let config = LoggingConfig::from_verbosity(2);
        assert_eq!(config.level, "debug");
        assert!(config.source_location);

        let config = LoggingConfig::from_verbosity(5);
        assert_eq!(config.level, "trace");
    }
}
