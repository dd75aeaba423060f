//! Process-local tabular store.

use crate::cell_text;
use async_trait::async_trait;
use copydesk_error::{CopydeskResult, StorageError, StorageErrorKind};
use copydesk_interface::TabularStore;
use serde_json::Value;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Tabular store held in memory.
///
/// Cells are stored as display strings, the same way a spreadsheet returns
/// them. It can be switched to an unavailable state to exercise failure paths.
#[derive(Debug, Default)]
pub struct InMemoryTable {
    rows: Mutex<Vec<Vec<String>>>,
    unavailable: AtomicBool,
    appends: AtomicUsize,
}

impl InMemoryTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-filled with rows.
    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    /// Snapshot of every row.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().map(|rows| rows.clone()).unwrap_or_default()
    }

    /// Number of successful appends since creation.
    pub fn append_count(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }

    /// Make every subsequent operation fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::new(StorageErrorKind::Unavailable(
                "in-memory table is offline".to_string(),
            )));
        }
        Ok(())
    }

    fn poisoned() -> StorageError {
        StorageError::new(StorageErrorKind::Unavailable(
            "in-memory table lock poisoned".to_string(),
        ))
    }
}

#[async_trait]
impl TabularStore for InMemoryTable {
    async fn read_all(&self) -> CopydeskResult<Vec<Vec<String>>> {
        self.check_available()?;
        let rows = self.rows.lock().map_err(|_| Self::poisoned())?;
        Ok(rows.clone())
    }

    async fn append_row(&self, values: &[Value]) -> CopydeskResult<()> {
        self.check_available()?;
        let mut rows = self.rows.lock().map_err(|_| Self::poisoned())?;
        rows.push(values.iter().map(cell_text).collect());
        self.appends.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
