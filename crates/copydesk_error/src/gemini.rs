//! Gemini-specific error types and rate-limit classification.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create Gemini client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// API request failed without a recognizable status code
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
}

/// Substrings that mark a provider message as a quota or rate-limit rejection.
const RATE_LIMIT_MARKERS: [&str; 3] = ["429", "quota", "resource_exhausted"];

impl GeminiErrorKind {
    /// Check whether this error means the provider is throttling us.
    ///
    /// HTTP 429 always counts. Other kinds count when their message mentions
    /// `429`, `quota` or `RESOURCE_EXHAUSTED` (case-insensitive), which is how
    /// the API reports quota exhaustion through non-429 wrappers.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError {
                status_code: 429, ..
            } => true,
            GeminiErrorKind::HttpError { message, .. } | GeminiErrorKind::ApiRequest(message) => {
                mentions_rate_limit(message)
            }
            GeminiErrorKind::MissingApiKey | GeminiErrorKind::ClientCreation(_) => false,
        }
    }
}

fn mentions_rate_limit(message: &str) -> bool {
    let lowered = message.to_lowercase();
    RATE_LIMIT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use copydesk_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that can signal a provider rate limit.
///
/// The generation retry wrapper backs off only when this returns true;
/// every other failure propagates immediately.
///
/// # Examples
///
/// ```
/// use copydesk_error::{GeminiError, GeminiErrorKind, RateLimitSignal};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 429,
///     message: "Too many requests".to_string(),
/// });
/// assert!(err.is_rate_limited());
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 400,
///     message: "Bad request".to_string(),
/// });
/// assert!(!err.is_rate_limited());
/// ```
pub trait RateLimitSignal {
    /// Returns true if this error is a rate-limit or quota rejection.
    fn is_rate_limited(&self) -> bool;
}

impl RateLimitSignal for GeminiError {
    fn is_rate_limited(&self) -> bool {
        self.kind.is_rate_limited()
    }
}
