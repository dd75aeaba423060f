//! Logging setup for the `copydesk` binary.
//!
//! Logs go to stderr for the one-shot commands. The terminal studio owns the
//! screen, so it logs to a file instead.

use copydesk_error::{ConfigError, CopydeskResult};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON lines instead of human-readable text
    pub json_logs: bool,
    /// Write to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Level derived from the `--verbose` flag.
    pub fn for_verbosity(verbose: bool) -> Self {
        Self {
            log_level: if verbose { "debug" } else { "info" }.to_string(),
            ..Self::default()
        }
    }

    /// Set JSON output.
    pub fn with_json_logs(mut self, json_logs: bool) -> Self {
        self.json_logs = json_logs;
        self
    }

    /// Set the log file.
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over [`LogConfig::log_level`].
pub fn init_logging(config: &LogConfig) -> CopydeskResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ConfigError::new(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = match &config.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    ConfigError::new(format!("Cannot open log file {}: {}", path.display(), e))
                })?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            if config.json_logs {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
        None => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);
            if config.json_logs {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Logging already initialized: {}", e)))?;

    tracing::debug!(
        level = %config.log_level,
        json = config.json_logs,
        file = ?config.log_file,
        "Logging initialized"
    );
    Ok(())
}
