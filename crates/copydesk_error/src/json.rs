//! Errors rendering or parsing JSON payloads (history dumps, API bodies).

/// A JSON payload could not be produced or understood.
///
/// # Examples
///
/// ```
/// use copydesk_error::JsonError;
///
/// let err = JsonError::new("history record is not an object");
/// assert!(err.to_string().starts_with("JSON Error: history record is not an object"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// What was wrong with the payload
    pub message: String,
    /// Line the error was raised at
    pub line: u32,
    /// File the error was raised in
    pub file: &'static str,
}

impl JsonError {
    /// Describe a payload problem, capturing the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
