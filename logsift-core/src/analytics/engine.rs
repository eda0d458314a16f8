use crate::analytics::constants::DEFAULT_STORE_TIMEOUT;
use crate::analytics::grouping::{self, HealthThresholds};
use crate::analytics::types::{
    EndpointCount, EndpointHealth, HourlyErrorCounts, HourlyRequestCounts, StatusCodeCounts,
};
use crate::event::{ClientId, Event};
use crate::store::{EventStore, ScanQuery, StoreError, scan_with_timeout, with_deadline};
use std::sync::Arc;
use std::time::Duration;

/// Status, traffic and endpoint-health views for a client.
///
/// Every call is a read. Mapping an unknown client to "not found" is left to
/// the caller, see [`AggregationEngine::client_exists`].
#[derive(Clone)]
pub struct AggregationEngine {
    store: Arc<dyn EventStore>,
    timeout: Duration,
    thresholds: HealthThresholds,
}

impl AggregationEngine {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            timeout: DEFAULT_STORE_TIMEOUT,
            thresholds: HealthThresholds::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_health_thresholds(mut self, thresholds: HealthThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub async fn client_exists(&self, client_id: &ClientId) -> Result<bool, StoreError> {
        with_deadline(self.timeout, self.store.client_exists(client_id)).await
    }

    pub async fn status_code_counts(
        &self,
        client_id: &ClientId,
    ) -> Result<StatusCodeCounts, StoreError> {
        let events = self.scan(&ScanQuery::for_client(client_id)).await?;
        Ok(grouping::status_code_counts(&events))
    }

    pub async fn request_counts_by_hour(
        &self,
        client_id: &ClientId,
    ) -> Result<HourlyRequestCounts, StoreError> {
        let events = self.scan(&ScanQuery::for_client(client_id)).await?;
        Ok(grouping::request_counts_by_hour(&events))
    }

    pub async fn error_counts_by_hour(
        &self,
        client_id: &ClientId,
    ) -> Result<HourlyErrorCounts, StoreError> {
        let events = self.scan(&ScanQuery::for_client(client_id)).await?;
        Ok(grouping::error_counts_by_hour(&events))
    }

    /// Across all clients.
    pub async fn top_endpoints(&self) -> Result<Vec<EndpointCount>, StoreError> {
        let events = self.scan(&ScanQuery::all()).await?;
        Ok(grouping::top_endpoints(&events))
    }

    pub async fn endpoint_health(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<EndpointHealth>, StoreError> {
        let events = self.scan(&ScanQuery::for_client(client_id)).await?;
        Ok(grouping::endpoint_health(&events, self.thresholds))
    }

    async fn scan(&self, query: &ScanQuery) -> Result<Vec<Event>, StoreError> {
        scan_with_timeout(self.store.as_ref(), query, self.timeout).await
    }
}
