use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tenant namespace an event belongs to. Supplied by the uploader, never
/// present in the log line itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ClientId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One parsed access-log record.
///
/// Events are immutable once built. `hour_window` is derived from
/// `timestamp` in [`Event::new`] and is the only key used for time bucketing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    client_id: ClientId,
    ip_address: String,
    method: String,
    endpoint: String,
    status_code: u16,
    response_size: u64,
    timestamp: NaiveDateTime,
    hour_window: NaiveDateTime,
}

impl Event {
    pub fn new(
        client_id: ClientId,
        ip_address: impl Into<String>,
        method: impl Into<String>,
        endpoint: impl Into<String>,
        status_code: u16,
        response_size: u64,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            client_id,
            ip_address: ip_address.into(),
            method: method.into(),
            endpoint: endpoint.into(),
            status_code,
            response_size,
            timestamp,
            hour_window: truncate_to_hour(timestamp),
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn response_size(&self) -> u64 {
        self.response_size
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn hour_window(&self) -> NaiveDateTime {
        self.hour_window
    }

    pub fn is_client_error(&self) -> bool {
        (400..=499).contains(&self.status_code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..=599).contains(&self.status_code)
    }

    /// 4xx or 5xx.
    pub fn is_error(&self) -> bool {
        (400..=599).contains(&self.status_code)
    }
}

/// Zeroes minutes, seconds and sub-second precision.
pub fn truncate_to_hour(ts: NaiveDateTime) -> NaiveDateTime {
    // hour() is always a valid hour, so the fallback is unreachable.
    ts.date().and_hms_opt(ts.hour(), 0, 0).unwrap_or(ts)
}
