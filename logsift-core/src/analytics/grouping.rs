use crate::analytics::constants::{AUTH_FAILURE_STATUSES, ERROR_RATE_THRESHOLD, MIN_REQUEST_THRESHOLD};
use crate::analytics::types::{
    EndpointCount, EndpointHealth, ErrorCounts, HealthStatus, HourlyErrorCounts,
    HourlyRequestCounts, StatusCodeCounts, SuspiciousIp,
};
use crate::event::Event;
use ahash::AHashMap;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

pub fn status_code_counts(events: &[Event]) -> StatusCodeCounts {
    let mut counts = StatusCodeCounts::new();
    for e in events {
        *counts.entry(e.status_code()).or_insert(0) += 1;
    }
    counts
}

pub fn request_counts_by_hour(events: &[Event]) -> HourlyRequestCounts {
    let mut counts = HourlyRequestCounts::new();
    for e in events {
        *counts.entry(e.hour_window()).or_insert(0) += 1;
    }
    counts
}

/// Hours without a single 4xx or 5xx are left out.
pub fn error_counts_by_hour(events: &[Event]) -> HourlyErrorCounts {
    let mut counts = HourlyErrorCounts::new();
    for e in events {
        if e.is_client_error() {
            counts.entry(e.hour_window()).or_default().count_4xx += 1;
        } else if e.is_server_error() {
            counts.entry(e.hour_window()).or_default().count_5xx += 1;
        }
    }
    counts
}

/// Descending by count. Equal counts keep the order in which the endpoints
/// first appear in `events`.
pub fn top_endpoints(events: &[Event]) -> Vec<EndpointCount> {
    let mut index: AHashMap<&str, usize> = AHashMap::new();
    let mut out: Vec<EndpointCount> = Vec::new();

    for e in events {
        match index.get(e.endpoint()) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(e.endpoint(), out.len());
                out.push(EndpointCount {
                    endpoint: e.endpoint().to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthThresholds {
    pub min_requests: u64,
    pub error_rate: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            min_requests: MIN_REQUEST_THRESHOLD,
            error_rate: ERROR_RATE_THRESHOLD,
        }
    }
}

/// Unhealthy (endpoint, hour) groups, ascending by hour.
///
/// Groups below `min_requests` are dropped before any rate is computed.
/// Within one hour, groups keep first-seen order.
pub fn endpoint_health(events: &[Event], thresholds: HealthThresholds) -> Vec<EndpointHealth> {
    let mut index: AHashMap<(&str, NaiveDateTime), usize> = AHashMap::new();
    let mut groups: Vec<(&str, NaiveDateTime, u64, u64)> = Vec::new();

    for e in events {
        let key = (e.endpoint(), e.hour_window());
        let i = *index.entry(key).or_insert_with(|| {
            groups.push((key.0, key.1, 0, 0));
            groups.len() - 1
        });
        groups[i].2 += 1;
        if e.is_error() {
            groups[i].3 += 1;
        }
    }

    let mut out: Vec<EndpointHealth> = groups
        .into_iter()
        .filter(|(_, _, total, _)| *total >= thresholds.min_requests)
        .filter_map(|(endpoint, hour_window, total, errors)| {
            let rate = errors as f64 / total as f64;
            if rate < thresholds.error_rate {
                return None;
            }
            Some(EndpointHealth {
                endpoint: endpoint.to_string(),
                hour_window,
                total_requests: total,
                error_count: errors,
                error_rate: round2(rate),
                status: HealthStatus::Unhealthy,
            })
        })
        .collect();

    out.sort_by_key(|h| h.hour_window);
    out
}

/// (ip, hour) groups of 401/403 events with at least `threshold` members,
/// ordered by hour then ip.
pub fn suspicious_ips(events: &[Event], threshold: u64) -> Vec<SuspiciousIp> {
    let mut groups: BTreeMap<(NaiveDateTime, &str), u64> = BTreeMap::new();

    for e in events
        .iter()
        .filter(|e| AUTH_FAILURE_STATUSES.contains(&e.status_code()))
    {
        *groups.entry((e.hour_window(), e.ip_address())).or_insert(0) += 1;
    }

    groups
        .into_iter()
        .filter(|(_, count)| *count >= threshold)
        .map(|((hour_window, ip), error_count)| SuspiciousIp {
            ip_address: ip.to_string(),
            hour_window,
            error_count,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

