//! Integration tests for the logging crate.

use logging::LoggingConfig;

#[test]
fn config_round_trips_through_json() {
    let config = LoggingConfig {
        level: "warn".to_string(),
        format: "compact".to_string(),
        log_file: Some("/tmp/vigia.log".to_string()),
        environment: "testing".to_string(),
    };

    let json = serde_json::to_string(&config).unwrap();
    let back: LoggingConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}

#[test]
fn config_defaults_apply_on_empty_object() {
    let config: LoggingConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, "json");
    assert_eq!(config.log_file, None);
    assert_eq!(config.environment, "development");
}

#[test]
fn every_format_builds_a_subscriber() {
    for format in ["json", "pretty", "compact"] {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: format.to_string(),
            log_file: None,
            environment: "testing".to_string(),
        };
        let _subscriber = config.build();
    }
}
