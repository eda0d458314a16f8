use crate::analytics::constants::{AUTH_FAILURE_STATUSES, DEFAULT_STORE_TIMEOUT};
use crate::analytics::grouping;
use crate::analytics::types::SuspiciousIp;
use crate::event::ClientId;
use crate::store::{EventStore, ScanQuery, StoreError, scan_with_timeout};
use std::sync::Arc;
use std::time::Duration;

/// Flags ip addresses producing bursts of authentication failures.
#[derive(Clone)]
pub struct SuspiciousActivityDetector {
    store: Arc<dyn EventStore>,
    timeout: Duration,
}

impl SuspiciousActivityDetector {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// One row per (ip, hour) with at least `threshold` 401/403 responses.
    pub async fn suspicious_ips(
        &self,
        client_id: &ClientId,
        threshold: u64,
    ) -> Result<Vec<SuspiciousIp>, StoreError> {
        let query = ScanQuery::for_client(client_id).with_status_codes(AUTH_FAILURE_STATUSES);
        let events = scan_with_timeout(self.store.as_ref(), &query, self.timeout).await?;

        let flagged = grouping::suspicious_ips(&events, threshold);
        if !flagged.is_empty() {
            tracing::info!(
                client_id = %client_id,
                threshold,
                flagged = flagged.len(),
                "suspicious ip activity detected"
            );
        }
        Ok(flagged)
    }
}
