//! Terminal studio for Copydesk.
//!
//! Renders the generation form, the variants of the last submission with a
//! per-variant export action, and a recent-history table. Built with ratatui.
//!
//! [`App`] holds all UI state and turns key presses into [`Action`]s; the
//! runner performs those actions against a
//! [`Studio`](copydesk_studio::Studio) and feeds the results back.

mod app;
mod branding;
mod events;
mod notifier;
mod runner;
mod session;
mod ui;

pub use app::{Action, App, AppMode, FormField, ResultsView, StatusKind};
pub use branding::{Branding, DEFAULT_ACCENT, DEFAULT_BRAND, parse_accent};
pub use copydesk_error::{TuiError, TuiErrorKind, TuiResult};
pub use events::{Event, EventHandler};
pub use notifier::StatusNotifier;
pub use runner::run_studio;
pub use session::SessionState;
