//! Top-level error wrapper types.

use crate::{
    ConfigError, GeminiError, HttpError, JsonError, RateLimitSignal, StorageError, ValidationError,
};
#[cfg(feature = "tui")]
use crate::TuiError;

/// Every error condition a Copydesk operation can surface.
///
/// # Examples
///
/// ```
/// use copydesk_error::{CopydeskError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: CopydeskError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CopydeskErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Submission rejected before generation
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Generation capability error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// History store error
    #[from(StorageError)]
    Storage(StorageError),
    /// TUI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Copydesk error with kind discrimination.
///
/// # Examples
///
/// ```
/// use copydesk_error::{CopydeskResult, ConfigError};
///
/// fn might_fail() -> CopydeskResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Copydesk Error: {}", _0)]
pub struct CopydeskError(Box<CopydeskErrorKind>);

impl CopydeskError {
    /// Create a new error from a kind.
    pub fn new(kind: CopydeskErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CopydeskErrorKind {
        &self.0
    }
}

impl RateLimitSignal for CopydeskError {
    fn is_rate_limited(&self) -> bool {
        match self.kind() {
            CopydeskErrorKind::Gemini(err) => err.is_rate_limited(),
            _ => false,
        }
    }
}

// Generic From implementation for any type that converts to CopydeskErrorKind
impl<T> From<T> for CopydeskError
where
    T: Into<CopydeskErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Copydesk operations.
pub type CopydeskResult<T> = std::result::Result<T, CopydeskError>;
