//! Mapping between the studio's data model and the positional history table.

use copydesk_core::{GenerationRequest, HISTORY_HEADER, HistoryRecord, HistoryRow, Variant};
use copydesk_error::CopydeskResult;
use copydesk_interface::TabularStore;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Current local time as ISO-8601 with second precision.
pub fn current_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Render a scalar cell the way a spreadsheet displays it.
///
/// # Examples
///
/// ```
/// use copydesk_storage::cell_text;
/// use serde_json::json;
///
/// assert_eq!(cell_text(&json!("Bold")), "Bold");
/// assert_eq!(cell_text(&json!(140)), "140");
/// assert_eq!(cell_text(&json!(0.5)), "0.5");
/// assert_eq!(cell_text(&json!(null)), "");
/// ```
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// History adapter over a tabular store.
///
/// The first row of the store is the header. Data rows are only ever
/// appended, one remote operation per row.
#[derive(Debug, Clone)]
pub struct HistoryStore<S> {
    store: S,
}

impl<S: TabularStore> HistoryStore<S> {
    /// Wrap a tabular store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the header row if the store is completely empty.
    ///
    /// Returns `true` when the header was written by this call.
    #[instrument(skip(self))]
    pub async fn ensure_header(&self) -> CopydeskResult<bool> {
        let rows = self.store.read_all().await?;
        if !rows.is_empty() {
            debug!(rows = rows.len(), "Store already initialised");
            return Ok(false);
        }

        let header: Vec<Value> = HISTORY_HEADER.iter().map(|c| Value::from(*c)).collect();
        self.store.append_row(&header).await?;
        info!("Wrote history header row");
        Ok(true)
    }

    /// Append one row per variant, all sharing a freshly captured timestamp.
    ///
    /// Returns the timestamp written.
    pub async fn append_variants(
        &self,
        request: &GenerationRequest,
        variants: &[Variant],
    ) -> CopydeskResult<String> {
        let timestamp = current_timestamp();
        self.append_variants_at(request, variants, &timestamp).await?;
        Ok(timestamp)
    }

    /// Append one row per variant with the given timestamp, in variant order.
    #[instrument(skip(self, request, variants), fields(variants = variants.len()))]
    pub async fn append_variants_at(
        &self,
        request: &GenerationRequest,
        variants: &[Variant],
        timestamp: &str,
    ) -> CopydeskResult<()> {
        for variant in variants {
            let row = HistoryRow::from_variant(request, variant, timestamp);
            self.store.append_row(&row.cells()).await?;
            debug!(variant = variant.index, "Appended history row");
        }
        info!(count = variants.len(), "Saved variants to history");
        Ok(())
    }

    /// Up to the last `limit` data rows, oldest first, keyed by header column.
    #[instrument(skip(self))]
    pub async fn read_recent(&self, limit: usize) -> CopydeskResult<Vec<HistoryRecord>> {
        let rows = self.store.read_all().await?;
        let Some((header, data)) = rows.split_first() else {
            return Ok(Vec::new());
        };

        let start = data.len().saturating_sub(limit);
        let records: Vec<HistoryRecord> = data[start..]
            .iter()
            .map(|row| HistoryRecord::from_row(header, row))
            .collect();
        debug!(total = data.len(), returned = records.len(), "Read history");
        Ok(records)
    }

    /// Number of rows below the header.
    pub async fn data_row_count(&self) -> CopydeskResult<usize> {
        let rows = self.store.read_all().await?;
        Ok(rows.len().saturating_sub(1))
    }

    /// Append an arbitrary row of cells, for diagnostics.
    pub async fn append_raw(&self, cells: &[Value]) -> CopydeskResult<()> {
        self.store.append_row(cells).await
    }
}
