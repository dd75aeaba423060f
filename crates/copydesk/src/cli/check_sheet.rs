//! Sheet connectivity diagnostic.

use copydesk::{
    CopydeskResult, HISTORY_HEADER, HistoryStore, ServiceAccountKey, Settings, current_timestamp,
};
use serde_json::Value;

/// Cells of the diagnostic row, aligned with the history header.
pub fn diagnostic_row(timestamp: &str) -> Vec<Value> {
    vec![
        Value::from(timestamp),
        Value::from("check-sheet"),
        Value::from(0.0),
        Value::from("Diagnostic"),
        Value::from("None (custom)"),
        Value::from("Connectivity check"),
        Value::from("Professional"),
        Value::from(0),
        Value::from(0),
        Value::from("ok"),
    ]
}

/// Handle the `check-sheet` command.
///
/// Prints the service-account email to share the sheet with, then reads
/// the sheet, writing the header if it is missing.
pub async fn handle_check_sheet(append_test_row: bool, settings: &Settings) -> CopydeskResult<()> {
    let key = ServiceAccountKey::from_file(&settings.credentials_path)?;
    println!("Service account: {}", key.client_email());
    println!("Share the sheet with this address as an Editor.");

    let store = super::open_sheet(settings)?;
    println!("Spreadsheet:     {}", store.spreadsheet_id());
    println!("Worksheet:       {}", store.worksheet_title().await?);

    let history = HistoryStore::new(store);
    if history.ensure_header().await? {
        println!("Header:          written ({} columns)", HISTORY_HEADER.len());
    } else {
        println!("Header:          present");
    }
    println!("Data rows:       {}", history.data_row_count().await?);

    if append_test_row {
        history.append_raw(&diagnostic_row(&current_timestamp())).await?;
        println!("Appended diagnostic row.");
    }

    tracing::info!("Sheet check passed");
    println!("OK");
    Ok(())
}
