// Integration tests for the global logger.
// Installing a global subscriber can only happen once per process, so the
// global path is covered by a single test in this binary.

use cfgkit::infrastructure::logging::{info, instrument, warn};
use cfgkit::{LogConfig, Logger, LoggingError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_logging_comprehensive() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        file_name: "itest".to_string(),
        path: temp_dir.path().to_path_buf(),
        level: "Info".to_string(),
        ..LogConfig::default()
    };

    let logger = start_logging(config.clone());

    info!("Test message 1");
    info!(key = "value", "Test message with fields");
    tracing::debug!("filtered out at info");

    let result = instrumented_add(5, 7);
    assert_eq!(result, 12);

    // A second global install must be refused
    let second = Logger::init(config);
    assert!(matches!(second, Err(LoggingError::AlreadyInstalled(_))));

    let log_path = logger.file_path();
    drop(logger);

    assert!(log_path.ends_with("itest.log"));
    let contents = fs::read_to_string(&log_path).unwrap();
    let records: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).expect("every line is a JSON record"))
        .collect();

    let messages: Vec<&str> = records
        .iter()
        .filter_map(|r| r["fields"]["message"].as_str())
        .collect();

    assert!(messages.contains(&"logger initialized"));
    assert!(messages.contains(&"Test message 1"), "records after init reach the file");
    assert!(messages.contains(&"Test message with fields"));
    assert!(messages.contains(&"entering instrumented function"));
    assert!(!messages.contains(&"filtered out at info"));

    let with_fields = records
        .iter()
        .find(|r| r["fields"]["message"] == "Test message with fields")
        .unwrap();
    assert_eq!(with_fields["fields"]["key"], "value");

    let instrumented = records
        .iter()
        .find(|r| r["fields"]["message"] == "entering instrumented function")
        .unwrap();
    assert_eq!(instrumented["span"]["name"], "instrumented_add");
}

// Initialization usually lives in a helper; the returned handle keeps the
// file sink alive after the helper returns.
fn start_logging(config: LogConfig) -> Logger {
    Logger::init(config).unwrap()
}

#[instrument]
fn instrumented_add(a: i32, b: i32) -> i32 {
    info!("entering instrumented function");
    if a < 0 {
        warn!("negative input");
    }
    a + b
}
