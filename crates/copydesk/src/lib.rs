//! Copydesk - a marketing copy studio.
//!
//! Copydesk turns a short brief (topic, content type, tone, length, optional
//! preset and extra instructions) into one to three generated variants,
//! appends every variant to a Google Sheet, and shows recent history.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use copydesk::{
//!     CopydeskConfig, GeminiClient, GenerationForm, GoogleSheetsStore, Studio, TracingNotifier,
//! };
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CopydeskConfig::load()?;
//! let store = GoogleSheetsStore::from_credentials_file("sheet-id", "credentials.json")?;
//! let studio = Studio::from_config(GeminiClient::new()?, store, &config, Arc::new(TracingNotifier));
//!
//! studio.prepare().await?;
//! let outcome = studio
//!     .submit(&GenerationForm {
//!         topic: "AI tools for small businesses".to_string(),
//!         ..Default::default()
//!     })
//!     .await;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini generator (default)
//! - `tui` - interactive terminal studio (default)
//!
//! # Architecture
//!
//! - `copydesk_error` - error types
//! - `copydesk_core` - option tables, requests, prompt builder, history rows
//! - `copydesk_interface` - generator, store, sleeper and notifier traits
//! - `copydesk_rate_limit` - rate-limit backoff and the tuning file
//! - `copydesk_models` - Gemini client
//! - `copydesk_storage` - history adapter and Google Sheets backend
//! - `copydesk_studio` - variant collection and the submission pipeline
//! - `copydesk_tui` - terminal studio
//!
//! This crate re-exports everything for convenience and adds environment
//! settings and logging setup for the `copydesk` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;
mod settings;

pub use observability::{LogConfig, init_logging};
pub use settings::{DEFAULT_CREDENTIALS_PATH, Settings};

// Re-export core crates (always available)
pub use copydesk_core::*;
pub use copydesk_error::*;
pub use copydesk_interface::*;
pub use copydesk_rate_limit::*;
pub use copydesk_storage::{
    GoogleSheetsStore, HistoryStore, InMemoryTable, SHEETS_SCOPE, ServiceAccountKey, cell_text,
    current_timestamp,
};
pub use copydesk_studio::*;

#[cfg(feature = "gemini")]
pub use copydesk_models::{GeminiClient, parse_gemini_error};

#[cfg(feature = "tui")]
pub use copydesk_tui::{App, Branding, SessionState, StatusNotifier, run_studio};
