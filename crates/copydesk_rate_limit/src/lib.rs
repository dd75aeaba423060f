//! Rate-limit recovery and tuning configuration.
//!
//! The generation capability throttles aggressively on free tiers. This crate
//! wraps a [`TextGenerator`](copydesk_interface::TextGenerator) with a bounded
//! exponential backoff that only reacts to rate-limit rejections, and loads the
//! TOML tuning file that sets the retry budget, pacing and display limits.

mod config;
mod retry;

pub use config::{
    CopydeskConfig, HistoryConfig, MAX_WAIT_SECS, PacingConfig, RetryConfig, StudioConfig,
};
pub use retry::{RetryPolicy, RetryingGenerator};
