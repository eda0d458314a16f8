use crate::conf::ConfigError;
use crate::conf::types::LogsiftConfig;

#[derive(Debug, Clone)]
pub struct RangeConstraint<T> {
    pub min: T,
    pub max: T,
    pub label: &'static str,
    pub units: Option<&'static str>,
}

impl<T: PartialOrd + std::fmt::Display + Copy> RangeConstraint<T> {
    fn check(&self, value: T, errors: &mut Vec<String>) {
        if value < self.min || value > self.max {
            let units = self.units.unwrap_or("");
            errors.push(format!(
                "{} must be between {}{units} and {}{units} (got {value}{units})",
                self.label, self.min, self.max
            ));
        }
    }
}

pub const SHIPPER_INTERVAL_MS: RangeConstraint<u64> = RangeConstraint {
    min: 100,
    max: 24 * 60 * 60 * 1000,
    label: "shipper.interval_ms",
    units: Some("ms"),
};

pub const SHIPPER_UPLOAD_TIMEOUT_MS: RangeConstraint<u64> = RangeConstraint {
    min: 100,
    max: 10 * 60 * 1000,
    label: "shipper.upload_timeout_ms",
    units: Some("ms"),
};

/// Checks the whole config and reports every problem at once.
pub fn validate(cfg: &LogsiftConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    let shipper = &cfg.shipper;

    if shipper.client_id.trim().is_empty() {
        errors.push("shipper.client_id must not be empty".to_string());
    }

    match shipper.url.parse::<url::Url>() {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(format!(
            "shipper.url must use http or https (got '{}')",
            url.scheme()
        )),
        Err(e) => errors.push(format!("shipper.url '{}' is invalid: {e}", shipper.url)),
    }

    if shipper.log_file.as_os_str().is_empty() {
        errors.push("shipper.log_file must not be empty".to_string());
    }

    if shipper.cursor_file.as_os_str().is_empty() {
        errors.push("shipper.cursor_file must not be empty".to_string());
    }

    SHIPPER_INTERVAL_MS.check(shipper.interval_ms, &mut errors);
    SHIPPER_UPLOAD_TIMEOUT_MS.check(shipper.upload_timeout_ms, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation { errors })
    }
}
