//! Core data types for the Copydesk content studio.
//!
//! This crate provides the closed option tables shown in the studio form, the
//! validated generation request, generated variants, history rows, and the
//! prompt builder. Nothing here performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod history;
mod options;
mod prompt;
mod request;
mod variant;

pub use history::{HISTORY_HEADER, HistoryRecord, HistoryRow, truncate_output};
pub use options::{ContentType, TemplatePreset, Tone};
pub use prompt::build_prompt;
pub use request::{
    GenerationForm, GenerationRequest, MAX_TARGET_LENGTH, MAX_VARIANTS, MIN_TARGET_LENGTH,
};
pub use variant::{EMPTY_VARIANT_PLACEHOLDER, RETRY_EXHAUSTED_PLACEHOLDER, Variant, clean_output};
