//! The Copydesk submission pipeline.
//!
//! A submission flows through four stages:
//!
//! 1. the form is validated into a [`GenerationRequest`](copydesk_core::GenerationRequest)
//! 2. the prompt is built from the request
//! 3. the [`VariantCollector`] asks the generator for each variant in turn,
//!    pausing between calls
//! 4. the variants are appended to the history store
//!
//! [`Studio::submit`] runs the pipeline and reports a [`SubmissionOutcome`]
//! instead of an error, so the presentation layer can match on what happened.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collector;
mod export;
mod studio;

pub use collector::VariantCollector;
pub use export::export_variant;
pub use studio::{Studio, SubmissionOutcome};
