//! Structured logging setup for the CLI
//!
//! Maps `-v` flags to tracing levels; `RUST_LOG` takes precedence
//! over the verbosity-derived filter when set.

use crate::error::{Error, Result};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Logging configuration derived from CLI flags
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Include file and line numbers
    pub source_location: bool,
    /// Include thread IDs
    pub thread_ids: bool,
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Self {
                level: "warn".to_string(),
                source_location: false,
                thread_ids: false,
            },
            1 => Self {
                level: "info".to_string(),
                source_location: false,
                thread_ids: false,
            },
            2 => Self {
                level: "debug".to_string(),
                source_location: true,
                thread_ids: false,
            },
            _ => Self {
                level: "trace".to_string(),
                source_location: true,
                thread_ids: true,
            },
        }
    }
}

/// Initialize the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_thread_ids(config.thread_ids)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Io(std::io::Error::other(format!("failed to initialize logging: {e}"))))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(LoggingConfig::from_verbosity(0).level, "warn");
        assert_eq!(LoggingConfig::from_verbosity(1).level, "info");

        let debug = LoggingConfig::from_verbosity(2);
        assert_eq!(debug.level, "debug");
        assert!(debug.source_location);
        assert!(!debug.thread_ids);

        let trace = LoggingConfig::from_verbosity(5);
        assert_eq!(trace.level, "trace");
        assert!(trace.thread_ids);
    }
}
