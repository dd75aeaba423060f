//! Tests for environment settings.

use copydesk::{DEFAULT_CREDENTIALS_PATH, Settings};
use std::collections::HashMap;
use std::path::PathBuf;

fn settings_from(vars: &[(&str, &str)]) -> Settings {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn test_empty_environment() {
    let settings = settings_from(&[]);

    assert!(settings.gemini_api_key.is_none());
    assert!(settings.sheet_id.is_none());
    assert_eq!(settings.credentials_path, PathBuf::from(DEFAULT_CREDENTIALS_PATH));
    assert!(settings.app_passcode.is_none());
}

#[test]
fn test_missing_values_are_config_errors() {
    let settings = settings_from(&[]);

    let err = settings.require_api_key().unwrap_err();
    assert!(err.to_string().contains("GEMINI_API_KEY"));

    let err = settings.require_sheet_id().unwrap_err();
    assert!(err.to_string().contains("SHEET_ID"));
}

#[test]
fn test_blank_values_count_as_unset() {
    let settings = settings_from(&[("GEMINI_API_KEY", "   "), ("APP_PASSCODE", "")]);

    assert!(settings.require_api_key().is_err());
    assert!(settings.app_passcode.is_none());
}

#[test]
fn test_full_environment() {
    let settings = settings_from(&[
        ("GEMINI_API_KEY", "key-123"),
        ("SHEET_ID", " sheet-abc "),
        ("GOOGLE_SHEETS_CREDENTIALS_PATH", "/secrets/sa.json"),
        ("BRAND_NAME", "Acme"),
        ("ACCENT_HEX", "#00AAFF"),
        ("LOGO_PATH", "assets/logo.png"),
        ("APP_PASSCODE", "letmein"),
    ]);

    assert_eq!(settings.require_api_key().unwrap(), "key-123");
    assert_eq!(settings.require_sheet_id().unwrap(), "sheet-abc");
    assert_eq!(settings.credentials_path, PathBuf::from("/secrets/sa.json"));
    assert_eq!(settings.brand_name.as_deref(), Some("Acme"));
    assert_eq!(settings.accent_hex.as_deref(), Some("#00AAFF"));
    assert_eq!(settings.logo_path, Some(PathBuf::from("assets/logo.png")));
    assert_eq!(settings.app_passcode.as_deref(), Some("letmein"));
}
