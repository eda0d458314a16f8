use crate::conf::{ConfigError, LogsiftConfig, ShipperConfig, load_config, parse_config, validate};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

fn origin() -> &'static Path {
    Path::new("logsift.hcl")
}

#[test]
fn empty_file_yields_defaults() {
    // Act
    let cfg = parse_config(origin(), "").expect("parse");

    // Assert
    assert_eq!(cfg, LogsiftConfig::default());
    assert!(!cfg.shipper.enabled);
    assert_eq!(cfg.shipper.client_id, "local-agent");
    assert_eq!(cfg.shipper.url, "http://localhost:8080/logs/upload");
    assert_eq!(cfg.shipper.interval(), Duration::from_secs(10));
    assert_eq!(cfg.shipper.upload_timeout(), Duration::from_secs(30));
    assert_eq!(cfg.shipper.batch_size, 20);
}

#[test]
fn shipper_block_overrides_defaults() {
    // Arrange
    let src = r#"
shipper {
  enabled     = true
  client_id   = "edge-01"
  url         = "https://logs.example.com/logs/upload"
  log_file    = "/var/log/apache2/access.log"
  cursor_file = "/var/lib/logsift/cursor"
  interval_ms = 2500
}
"#;

    // Act
    let cfg = parse_config(origin(), src).expect("parse");

    // Assert
    assert_eq!(
        cfg.shipper,
        ShipperConfig {
            enabled: true,
            client_id: "edge-01".to_string(),
            url: "https://logs.example.com/logs/upload".to_string(),
            log_file: PathBuf::from("/var/log/apache2/access.log"),
            cursor_file: PathBuf::from("/var/lib/logsift/cursor"),
            interval_ms: 2500,
            ..ShipperConfig::default()
        }
    );
}

#[test]
fn unknown_field_is_a_parse_error() {
    // Act
    let err = parse_config(origin(), "shipper {\n  colour = \"red\"\n}\n").unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
}

#[test]
fn validation_reports_every_problem() {
    // Arrange
    let mut cfg = LogsiftConfig::default();
    cfg.shipper.client_id = "  ".to_string();
    cfg.shipper.url = "ftp://example.com/upload".to_string();
    cfg.shipper.interval_ms = 5;

    // Act
    let err = validate(&cfg).unwrap_err();

    // Assert
    let ConfigError::Validation { errors } = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 3, "{errors:#?}");
    assert!(errors[0].contains("client_id"));
    assert!(errors[1].contains("http or https"));
    assert!(errors[2].contains("shipper.interval_ms"));
}

#[test]
fn malformed_url_is_rejected() {
    // Arrange
    let mut cfg = LogsiftConfig::default();
    cfg.shipper.url = "not a url".to_string();

    // Act
    let err = validate(&cfg).unwrap_err();

    // Assert
    assert!(err.to_string().contains("shipper.url"));
}

#[test]
fn load_config_reads_and_validates() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logsift.hcl");
    std::fs::write(&path, "shipper {\n  upload_timeout_ms = 1000000\n}\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(err.to_string().contains("shipper.upload_timeout_ms"));
}

#[test]
fn missing_file_is_a_read_error() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = load_config(&dir.path().join("nope.hcl")).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}
