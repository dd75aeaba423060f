//! Tests for logging configuration.

use copydesk::{LogConfig, init_logging};
use std::path::PathBuf;

#[test]
fn test_verbosity_levels() {
    assert_eq!(LogConfig::for_verbosity(false).log_level, "info");
    assert_eq!(LogConfig::for_verbosity(true).log_level, "debug");
}

#[test]
fn test_builders() {
    let config = LogConfig::default()
        .with_json_logs(true)
        .with_log_file(Some(PathBuf::from("studio.log")));

    assert!(config.json_logs);
    assert_eq!(config.log_file, Some(PathBuf::from("studio.log")));
}

#[test]
fn test_file_logging_initializes_once() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("copydesk.log");
    let config = LogConfig::default().with_log_file(Some(path.clone()));

    init_logging(&config)?;
    assert!(path.exists());

    // A second global subscriber is refused
    assert!(init_logging(&config).is_err());
    Ok(())
}
