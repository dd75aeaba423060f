use copydesk_core::{
    ContentType, GenerationForm, HISTORY_HEADER, HistoryRecord, HistoryRow, TemplatePreset, Tone,
    Variant, clean_output, truncate_output,
};
use serde_json::{Value, json};

fn request() -> copydesk_core::GenerationRequest {
    GenerationForm {
        topic: "AI tools for small businesses".to_string(),
        content_type: ContentType::AdCopy,
        tone: Tone::Bold,
        target_length: 140,
        template: TemplatePreset::Custom,
        temperature: 0.7,
        variant_count: 2,
        ..Default::default()
    }
    .validate()
    .unwrap()
}

#[test]
fn row_cells_follow_header_order() {
    let row = HistoryRow::from_variant(&request(), &Variant::new(2, "Y"), "2026-10-17T09:30:00");
    let cells = row.cells();

    assert_eq!(cells.len(), HISTORY_HEADER.len());
    assert_eq!(
        cells,
        vec![
            json!("2026-10-17T09:30:00"),
            json!("gemini-2.5-flash"),
            json!(0.7),
            json!("Ad Copy"),
            json!("None (custom)"),
            json!("AI tools for small businesses"),
            json!("Bold"),
            json!(140),
            json!(2),
            json!("Y"),
        ]
    );
    assert!(matches!(cells[7], Value::Number(_)));
}

#[test]
fn record_preserves_column_order() {
    let header: Vec<String> = HISTORY_HEADER.iter().map(|c| c.to_string()).collect();
    let row: Vec<String> = (0..10).map(|i| format!("v{}", i)).collect();
    let record = HistoryRecord::from_row(&header, &row);

    assert_eq!(record.columns().collect::<Vec<_>>(), HISTORY_HEADER.to_vec());
    assert_eq!(record.get("Output"), Some("v9"));
    assert_eq!(record.len(), 10);

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.starts_with("{\"Timestamp\":\"v0\",\"Model\":\"v1\""));
}

#[test]
fn record_truncates_only_output() {
    let header = vec!["Topic".to_string(), "Output".to_string()];
    let long = "x".repeat(200);
    let record = HistoryRecord::from_row(&header, &[long.clone(), long.clone()]);
    let shown = record.with_truncated_output(120, 140);

    assert_eq!(shown.get("Topic"), Some(long.as_str()));
    let output = shown.get("Output").unwrap();
    assert_eq!(output.chars().count(), 121);
    assert!(output.ends_with('…'));
}

#[test]
fn truncation_threshold_is_exclusive_and_char_based() {
    let at_limit = "é".repeat(140);
    assert_eq!(truncate_output(&at_limit, 120, 140), at_limit);

    let over = "é".repeat(141);
    let shown = truncate_output(&over, 120, 140);
    assert_eq!(shown.chars().count(), 121);
}

#[test]
fn clean_output_normalizes_line_endings() {
    assert_eq!(clean_output("  line one\r\nline two \r\n"), "line one\nline two");
    assert_eq!(clean_output(" \n "), "");
}
