use crate::conf::types::LogsiftConfig;
use crate::conf::validation::validate;
use crate::conf::ConfigError;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/logsift.hcl";

/// Reads, parses and validates a config file.
pub fn load_config(path: &Path) -> Result<LogsiftConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg = parse_config(path, &s)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Parses without validating. `origin` is only used in error messages.
pub fn parse_config(origin: &Path, s: &str) -> Result<LogsiftConfig, ConfigError> {
    hcl::from_str(s).map_err(|e| ConfigError::parse(origin, e))
}
