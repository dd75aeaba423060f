//! Terminal studio error types.

/// What went wrong while driving the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TuiErrorKind {
    /// Raw mode, the alternate screen or the backend could not be set up
    #[display("Terminal setup failed: {}", _0)]
    TerminalSetup(String),
    /// The terminal could not be handed back to the shell
    #[display("Terminal restore failed: {}", _0)]
    TerminalRestore(String),
    /// Waiting for input failed
    #[display("Input poll failed: {}", _0)]
    EventPoll(String),
    /// Reading a key press failed
    #[display("Input read failed: {}", _0)]
    EventRead(String),
    /// A studio frame could not be drawn
    #[display("Drawing the studio failed: {}", _0)]
    Draw(String),
}

/// Terminal studio error with the location it was raised at.
///
/// # Examples
///
/// ```
/// use copydesk_error::{TuiError, TuiErrorKind};
///
/// let err = TuiError::new(TuiErrorKind::Draw("frame too small".to_string()));
/// assert!(err.to_string().contains("Drawing the studio failed: frame too small"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Studio UI Error: {} at line {} in {}", kind, line, file)]
pub struct TuiError {
    /// What went wrong
    pub kind: TuiErrorKind,
    /// Line the error was raised at
    pub line: u32,
    /// File the error was raised in
    pub file: &'static str,
}

impl TuiError {
    /// Wrap a kind, capturing the caller's location.
    #[track_caller]
    pub fn new(kind: TuiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result alias for terminal studio operations.
pub type TuiResult<T> = Result<T, TuiError>;
