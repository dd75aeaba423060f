//! Append-only generation history for Copydesk.
//!
//! [`HistoryStore`] maps requests and variants onto the fixed ten-column
//! history layout of any [`TabularStore`](copydesk_interface::TabularStore).
//! Two backends are provided:
//!
//! - [`GoogleSheetsStore`] - the first worksheet of a Google spreadsheet,
//!   authenticated with a service account key
//! - [`InMemoryTable`] - a process-local table for tests and dry runs
//!
//! # Example
//!
//! ```rust
//! use copydesk_core::{GenerationForm, Variant};
//! use copydesk_storage::{HistoryStore, InMemoryTable};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let history = HistoryStore::new(InMemoryTable::new());
//! history.ensure_header().await?;
//!
//! let request = GenerationForm {
//!     topic: "Cold brew subscriptions".to_string(),
//!     ..Default::default()
//! }
//! .validate()?;
//! history
//!     .append_variants(&request, &[Variant::new(1, "Wake up to better coffee.")])
//!     .await?;
//!
//! let recent = history.read_recent(25).await?;
//! assert_eq!(recent.len(), 1);
//! assert_eq!(recent[0].get("Output"), Some("Wake up to better coffee."));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod history;
mod memory;
mod sheets;

pub use copydesk_error::{StorageError, StorageErrorKind};
pub use history::{HistoryStore, cell_text, current_timestamp};
pub use memory::InMemoryTable;
pub use sheets::{GoogleSheetsStore, SHEETS_SCOPE, ServiceAccountKey};
