//! Logging Tests

use tempfile::TempDir;
use tracing::Level;
use wiring_infrastructure::constants::DEFAULT_LOG_LEVEL;
use wiring_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..Default::default()
    };
    assert!(init_logging(&config).is_err());
}

// Only test in this binary that installs the global subscriber
#[test]
fn test_init_logging_installs_once() {
    let temp_dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(temp_dir.path().join("wiring.log")),
    };

    init_logging(&config).expect("first initialization succeeds");
    assert!(init_logging(&config).is_err());
}
