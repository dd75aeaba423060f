//! History store error types.

/// Kinds of history store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Service account credentials could not be read or parsed
    #[display("Invalid credentials: {}", _0)]
    Credentials(String),
    /// Token exchange with the authorization server failed
    #[display("Authorization failed: {}", _0)]
    Authorization(String),
    /// Store responded with a non-success status
    #[display("Store request failed with HTTP {}: {}", status_code, message)]
    Request {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Store response did not have the expected shape
    #[display("Malformed store response: {}", _0)]
    MalformedResponse(String),
    /// Spreadsheet has no worksheets
    #[display("Spreadsheet has no worksheets: {}", _0)]
    NoWorksheet(String),
    /// Failed to write an exported file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Store backend is unavailable
    #[display("Store unavailable: {}", _0)]
    Unavailable(String),
}

/// History store error with location tracking.
///
/// # Examples
///
/// ```
/// use copydesk_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Unavailable("connection reset".to_string()));
/// assert!(format!("{}", err).contains("unavailable"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
