use std::time::Duration;

/// (endpoint, hour) groups with fewer requests are ignored by the health view.
pub const MIN_REQUEST_THRESHOLD: u64 = 10;

/// Error rate at or above which a group is UNHEALTHY.
pub const ERROR_RATE_THRESHOLD: f64 = 0.30;

/// Default number of auth failures per (ip, hour) that marks an ip suspicious.
pub const DEFAULT_SUSPICIOUS_THRESHOLD: u64 = 5;

pub const AUTH_FAILURE_STATUSES: &[u16] = &[401, 403];

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);
