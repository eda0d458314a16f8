use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

/// status code -> number of events
pub type StatusCodeCounts = BTreeMap<u16, u64>;

/// hour window -> number of events, ascending by hour
pub type HourlyRequestCounts = BTreeMap<NaiveDateTime, u64>;

/// hour window -> 4xx/5xx split, ascending by hour
pub type HourlyErrorCounts = BTreeMap<NaiveDateTime, ErrorCounts>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ErrorCounts {
    #[serde(rename = "4xx")]
    pub count_4xx: u64,
    #[serde(rename = "5xx")]
    pub count_5xx: u64,
}

impl ErrorCounts {
    pub fn total(&self) -> u64 {
        self.count_4xx + self.count_5xx
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointCount {
    pub endpoint: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointHealth {
    pub endpoint: String,
    pub hour_window: NaiveDateTime,
    pub total_requests: u64,
    pub error_count: u64,
    /// Rounded to two decimals.
    pub error_rate: f64,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspiciousIp {
    pub ip_address: String,
    pub hour_window: NaiveDateTime,
    pub error_count: u64,
}
