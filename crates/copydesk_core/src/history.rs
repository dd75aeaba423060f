//! History rows written to, and records read back from, the tabular store.

use crate::{GenerationRequest, Variant};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Fixed header row of the history store, in column order.
pub const HISTORY_HEADER: [&str; 10] = [
    "Timestamp",
    "Model",
    "Temperature",
    "Type",
    "Template",
    "Topic",
    "Tone",
    "Length",
    "Variant",
    "Output",
];

/// One persisted record: exactly one variant of exactly one request.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    /// ISO-8601 timestamp, second precision, shared by all variants of a request
    pub timestamp: String,
    /// Model identifier
    pub model_id: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Content type label
    pub content_type: String,
    /// Template preset label
    pub template: String,
    /// Trimmed topic
    pub topic: String,
    /// Tone label
    pub tone: String,
    /// Target length in words
    pub target_length: u32,
    /// 1-based variant index
    pub variant_index: usize,
    /// Variant text
    pub text: String,
}

impl HistoryRow {
    /// Flatten a request and one of its variants into a row.
    pub fn from_variant(
        request: &GenerationRequest,
        variant: &Variant,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            model_id: request.model_id().clone(),
            temperature: *request.temperature(),
            content_type: request.content_type().to_string(),
            template: request.template().to_string(),
            topic: request.topic().clone(),
            tone: request.tone().to_string(),
            target_length: *request.target_length(),
            variant_index: variant.index,
            text: variant.text.clone(),
        }
    }

    /// Positional cell values matching [`HISTORY_HEADER`].
    ///
    /// Numeric columns stay numeric; the temperature is rounded to two
    /// decimals so `0.7` is not written as `0.699999988079071`.
    pub fn cells(&self) -> Vec<Value> {
        let temperature = (f64::from(self.temperature) * 100.0).round() / 100.0;
        vec![
            Value::from(self.timestamp.clone()),
            Value::from(self.model_id.clone()),
            Value::from(temperature),
            Value::from(self.content_type.clone()),
            Value::from(self.template.clone()),
            Value::from(self.topic.clone()),
            Value::from(self.tone.clone()),
            Value::from(self.target_length),
            Value::from(self.variant_index),
            Value::from(self.text.clone()),
        ]
    }
}

/// A data row read back from the store, keyed by header column.
///
/// Column order and values are preserved exactly as stored.
///
/// # Examples
///
/// ```
/// use copydesk_core::HistoryRecord;
///
/// let header = vec!["Topic".to_string(), "Output".to_string()];
/// let record = HistoryRecord::from_row(&header, &["Coffee".to_string()]);
///
/// assert_eq!(record.get("Topic"), Some("Coffee"));
/// assert_eq!(record.get("Output"), Some(""));
/// assert_eq!(record.get("Missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryRecord {
    fields: Vec<(String, String)>,
}

impl HistoryRecord {
    /// Pair a raw row with the header, padding short rows with empty cells.
    ///
    /// Cells beyond the header width have no column name and are dropped.
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        let fields = header
            .iter()
            .enumerate()
            .map(|(i, column)| (column.clone(), row.get(i).cloned().unwrap_or_default()))
            .collect();
        Self { fields }
    }

    /// Value of a column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in stored order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy of this record with the `Output` cell shortened for display.
    pub fn with_truncated_output(&self, preview_chars: usize, truncate_over: usize) -> Self {
        let fields = self
            .fields
            .iter()
            .map(|(name, value)| {
                if name == "Output" {
                    (name.clone(), truncate_output(value, preview_chars, truncate_over))
                } else {
                    (name.clone(), value.clone())
                }
            })
            .collect();
        Self { fields }
    }
}

impl Serialize for HistoryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Shorten long text for table display.
///
/// Text longer than `truncate_over` characters becomes its first
/// `preview_chars` characters followed by `…`; anything shorter is returned
/// unchanged. Counts characters, not bytes.
///
/// # Examples
///
/// ```
/// use copydesk_core::truncate_output;
///
/// assert_eq!(truncate_output("short", 3, 10), "short");
/// assert_eq!(truncate_output("abcdefghijk", 3, 10), "abc…");
/// ```
pub fn truncate_output(text: &str, preview_chars: usize, truncate_over: usize) -> String {
    if text.chars().count() > truncate_over {
        let mut preview: String = text.chars().take(preview_chars).collect();
        preview.push('…');
        preview
    } else {
        text.to_string()
    }
}
