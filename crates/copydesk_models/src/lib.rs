//! Generative model integrations for Copydesk.
//!
//! Each provider sits behind its own feature flag and implements
//! [`TextGenerator`](copydesk_interface::TextGenerator). Only Google Gemini is
//! provided today.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use copydesk_interface::TextGenerator;
//! use copydesk_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let text = client
//!     .generate_once("gemini-2.5-flash", "Write a tagline for a bakery.", 0.5)
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiClient, GeminiResult, parse_gemini_error};
