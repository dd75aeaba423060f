//! Environment settings for the `copydesk` binary.

use copydesk_error::{ConfigError, CopydeskResult};
use std::path::PathBuf;

/// Default location of the service-account key file.
pub const DEFAULT_CREDENTIALS_PATH: &str = "credentials.json";

/// Values read from the process environment (optionally seeded by `.env`).
///
/// Nothing is required up front; each command asks for the values it needs
/// through the `require_*` accessors, so `history` works without a Gemini
/// key and `generate` fails fast when one is missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    /// `GEMINI_API_KEY`
    pub gemini_api_key: Option<String>,
    /// `SHEET_ID`
    pub sheet_id: Option<String>,
    /// `GOOGLE_SHEETS_CREDENTIALS_PATH`, defaulting to `credentials.json`
    pub credentials_path: PathBuf,
    /// `BRAND_NAME`
    pub brand_name: Option<String>,
    /// `ACCENT_HEX`
    pub accent_hex: Option<String>,
    /// `LOGO_PATH`
    pub logo_path: Option<PathBuf>,
    /// `APP_PASSCODE`
    pub app_passcode: Option<String>,
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            gemini_api_key: read("GEMINI_API_KEY"),
            sheet_id: read("SHEET_ID"),
            credentials_path: read("GOOGLE_SHEETS_CREDENTIALS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_PATH)),
            brand_name: read("BRAND_NAME"),
            accent_hex: read("ACCENT_HEX"),
            logo_path: read("LOGO_PATH").map(PathBuf::from),
            app_passcode: read("APP_PASSCODE"),
        }
    }

    /// The Gemini API key, or a configuration error naming the variable.
    #[track_caller]
    pub fn require_api_key(&self) -> CopydeskResult<&str> {
        match self.gemini_api_key.as_deref() {
            Some(key) => Ok(key),
            None => Err(ConfigError::new("GEMINI_API_KEY missing in environment or .env").into()),
        }
    }

    /// The history spreadsheet id, or a configuration error naming the variable.
    #[track_caller]
    pub fn require_sheet_id(&self) -> CopydeskResult<&str> {
        match self.sheet_id.as_deref() {
            Some(id) => Ok(id),
            None => Err(ConfigError::new("SHEET_ID missing in environment or .env").into()),
        }
    }
}
