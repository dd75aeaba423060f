//! Error types for the Copydesk content studio.
//!
//! This crate provides the error types shared by every Copydesk crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use copydesk_error::{CopydeskResult, HttpError};
//!
//! fn fetch_rows() -> CopydeskResult<Vec<String>> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_rows() {
//!     Ok(rows) => println!("Got {} rows", rows.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod http;
mod json;
mod storage;
#[cfg(feature = "tui")]
mod tui;
mod validation;

pub use config::ConfigError;
pub use error::{CopydeskError, CopydeskErrorKind, CopydeskResult};
pub use gemini::{GeminiError, GeminiErrorKind, RateLimitSignal};
pub use http::HttpError;
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
pub use validation::{ValidationError, ValidationErrorKind};
