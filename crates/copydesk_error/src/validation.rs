//! Submission validation error types.

/// Reasons a submission is rejected before any generation happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Topic is empty after trimming
    #[display("Please enter a topic.")]
    EmptyTopic,
    /// Target length outside the supported word range
    #[display("Target length must be between {} and {} words, got {}", min, max, value)]
    LengthOutOfRange {
        /// Smallest accepted length
        min: u32,
        /// Largest accepted length
        max: u32,
        /// Rejected value
        value: u32,
    },
    /// Temperature outside [0, 1]
    #[display("Temperature must be between 0.0 and 1.0, got {}", _0)]
    TemperatureOutOfRange(String),
    /// Variant count outside 1..=3
    #[display("Variant count must be 1, 2 or 3, got {}", _0)]
    VariantCountOutOfRange(u8),
    /// Label does not name any option of a closed table
    #[display("Unknown {}: {}", field, value)]
    UnknownOption {
        /// Which table was consulted
        field: &'static str,
        /// Rejected label
        value: String,
    },
}

/// Validation error with location tracking.
///
/// Recoverable: reported to the user, no pipeline execution.
///
/// # Examples
///
/// ```
/// use copydesk_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyTopic);
/// assert!(format!("{}", err).contains("topic"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
