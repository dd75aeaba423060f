//! Tuning configuration loaded from TOML.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from copydesk.toml)
//! - User overrides (~/.config/copydesk/copydesk.toml, then ./copydesk.toml)
//! - Automatic merging with user values taking precedence

use copydesk_error::{ConfigError, CopydeskError, CopydeskResult};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Longest accepted backoff base or pacing delay, in seconds.
pub const MAX_WAIT_SECS: f64 = 3600.0;

/// Seconds as a duration, clamped to `0..=MAX_WAIT_SECS`; NaN becomes zero.
pub(crate) fn wait_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs.clamp(0.0, MAX_WAIT_SECS)).unwrap_or_default()
}

/// Backoff settings for rate-limited generation calls.
///
/// ```toml
/// [retry]
/// max_retries = 3
/// base_wait_secs = 4.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Extra attempts after the first one
    pub max_retries: u32,
    /// First backoff wait in seconds, doubled on each further attempt
    pub base_wait_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_wait_secs: 4.0,
        }
    }
}

/// Delay between consecutive variants of one submission.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Seconds to wait between variants
    pub between_variants_secs: f64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            between_variants_secs: 2.5,
        }
    }
}

impl PacingConfig {
    /// Pacing delay as a duration.
    pub fn between_variants(&self) -> Duration {
        wait_duration(self.between_variants_secs)
    }
}

/// Recent-activity panel limits.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of most recent rows shown
    pub limit: usize,
    /// Characters kept when an output is shortened
    pub preview_chars: usize,
    /// Outputs longer than this many characters are shortened
    pub truncate_over_chars: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: 25,
            preview_chars: 120,
            truncate_over_chars: 140,
        }
    }
}

/// Form defaults and export location.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Selectable model identifiers; the first is the default
    pub models: Vec<String>,
    /// Initial temperature
    pub default_temperature: f32,
    /// Temperature change per key press
    pub temperature_step: f32,
    /// Initial target length in words
    pub default_length: u32,
    /// Target length change per key press
    pub length_step: u32,
    /// Directory variant exports are written to
    pub export_dir: PathBuf,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            models: vec!["gemini-2.5-flash".to_string(), "gemini-2.5-pro".to_string()],
            default_temperature: 0.5,
            temperature_step: 0.1,
            default_length: 140,
            length_step: 10,
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl StudioConfig {
    /// Model preselected in the form.
    pub fn default_model(&self) -> &str {
        self.models
            .first()
            .map(String::as_str)
            .unwrap_or("gemini-2.5-flash")
    }
}

/// Top-level tuning configuration.
///
/// # Example
///
/// ```no_run
/// use copydesk_rate_limit::CopydeskConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CopydeskConfig::load()?;
/// println!("Retries: {}", config.retry.max_retries);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CopydeskConfig {
    /// Rate-limit backoff
    #[serde(default)]
    pub retry: RetryConfig,
    /// Inter-variant pacing
    #[serde(default)]
    pub pacing: PacingConfig,
    /// History panel
    #[serde(default)]
    pub history: HistoryConfig,
    /// Studio form
    #[serde(default)]
    pub studio: StudioConfig,
}

impl CopydeskConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> CopydeskResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                CopydeskError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CopydeskError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (copydesk.toml shipped with the binary)
    /// 2. User config in home directory (~/.config/copydesk/copydesk.toml)
    /// 3. User config in current directory (./copydesk.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> CopydeskResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../copydesk.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/copydesk/copydesk.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("copydesk").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                CopydeskError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CopydeskError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the pipeline misbehave.
    pub fn validate(&self) -> CopydeskResult<()> {
        let waits = [
            ("retry.base_wait_secs", self.retry.base_wait_secs),
            ("pacing.between_variants_secs", self.pacing.between_variants_secs),
        ];
        for (name, secs) in waits {
            if !(0.0..=MAX_WAIT_SECS).contains(&secs) {
                return Err(ConfigError::new(format!(
                    "{} must be between 0 and {} seconds, got {}",
                    name, MAX_WAIT_SECS, secs
                ))
                .into());
            }
        }
        if self.studio.models.is_empty() {
            return Err(ConfigError::new("studio.models must list at least one model").into());
        }
        if self.history.preview_chars > self.history.truncate_over_chars {
            return Err(ConfigError::new(
                "history.preview_chars must not exceed history.truncate_over_chars",
            )
            .into());
        }
        Ok(())
    }
}
