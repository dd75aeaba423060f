//! Trait definitions for the Copydesk content studio.
//!
//! The studio talks to two external capabilities, a text generator and an
//! append-only tabular store (plus the retrying wrapper around the generator), and to two side channels, a sleeper for
//! deliberate delays and a notifier for user-visible warnings. Each is a trait
//! here so the pipeline can be driven by real clients or by test doubles.

mod traits;

pub use traits::{
    Notifier, ResilientGenerator, Sleeper, TabularStore, TextGenerator, TokioSleeper,
    TracingNotifier,
};
