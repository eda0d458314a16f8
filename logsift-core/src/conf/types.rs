use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root of `logsift.hcl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogsiftConfig {
    #[serde(default)]
    pub shipper: ShipperConfig,
}

/// The `shipper { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShipperConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// Ingestion endpoint batches are POSTed to.
    #[serde(default = "default_url")]
    pub url: String,

    /// File being tailed.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Side file holding the shipped byte offset.
    #[serde(default = "default_cursor_file")]
    pub cursor_file: PathBuf,

    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "default_upload_timeout_ms")]
    pub upload_timeout_ms: u64,

    /// Accepted for compatibility with older agent configs. Batches are not
    /// capped: a tick ships everything written since the previous one.
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
}

impl ShipperConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_millis(self.upload_timeout_ms)
    }
}

impl Default for ShipperConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            client_id: default_client_id(),
            url: default_url(),
            log_file: default_log_file(),
            cursor_file: default_cursor_file(),
            interval_ms: default_interval_ms(),
            upload_timeout_ms: default_upload_timeout_ms(),
            batch_size: default_batch_size(),
        }
    }
}

fn default_client_id() -> String {
    "local-agent".to_string()
}

fn default_url() -> String {
    "http://localhost:8080/logs/upload".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("./sampleLogs/sampleApacheSimple.log")
}

fn default_cursor_file() -> PathBuf {
    PathBuf::from("logshipper-position.txt")
}

fn default_interval_ms() -> u64 {
    10_000
}

fn default_upload_timeout_ms() -> u64 {
    30_000
}

fn default_batch_size() -> u32 {
    20
}
