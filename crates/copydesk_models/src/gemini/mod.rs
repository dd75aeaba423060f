//! Google Gemini REST client.

mod client;

pub use client::{GeminiClient, parse_gemini_error};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, copydesk_error::GeminiError>;
