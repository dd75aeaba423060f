//! History listing command.

use copydesk::{CopydeskConfig, CopydeskResult, HistoryRecord, HistoryStore, JsonError, Settings};

/// Columns shown in the table view, in order.
const TABLE_COLUMNS: [&str; 6] = ["Timestamp", "Model", "Type", "Tone", "Variant", "Output"];

/// Handle the `history` command.
pub async fn handle_history(
    limit: Option<usize>,
    json: bool,
    settings: &Settings,
    config: &CopydeskConfig,
) -> CopydeskResult<()> {
    let history = HistoryStore::new(super::open_sheet(settings)?);
    let limit = limit.unwrap_or(config.history.limit);
    let records = history.read_recent(limit).await?;

    if json {
        let rendered = serde_json::to_string_pretty(&records)
            .map_err(|e| JsonError::new(format!("Failed to render history: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    if records.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    let truncated: Vec<HistoryRecord> = records
        .iter()
        .map(|record| {
            record.with_truncated_output(
                config.history.preview_chars,
                config.history.truncate_over_chars,
            )
        })
        .collect();
    print!("{}", render_table(&truncated));
    Ok(())
}

/// Render records as a pipe-separated table with a header line.
pub fn render_table(records: &[HistoryRecord]) -> String {
    let mut out = TABLE_COLUMNS.join(" | ");
    out.push('\n');
    for record in records {
        let line: Vec<String> = TABLE_COLUMNS
            .iter()
            .map(|column| record.get(column).unwrap_or("").replace('\n', " "))
            .collect();
        out.push_str(&line.join(" | "));
        out.push('\n');
    }
    out
}
