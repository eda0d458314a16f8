use crate::event::{ClientId, Event};
use crate::store::{ScanQuery, StoreError};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn insert(&self, event: Event) -> Result<(), StoreError>;

    /// Matching events, in the order they were inserted.
    async fn scan(&self, query: &ScanQuery) -> Result<Vec<Event>, StoreError>;

    /// True once at least one event has been stored for `client_id`.
    async fn client_exists(&self, client_id: &ClientId) -> Result<bool, StoreError>;

    /// Removes every event of `client_id`, returning how many were removed.
    async fn delete_by_client(&self, client_id: &ClientId) -> Result<usize, StoreError>;
}

/// Runs a store call, failing with [`StoreError::Timeout`] once `limit` expires.
pub async fn with_deadline<T, F>(limit: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout(limit)),
    }
}

/// [`EventStore::scan`] bounded by `limit`.
pub async fn scan_with_timeout(
    store: &dyn EventStore,
    query: &ScanQuery,
    limit: Duration,
) -> Result<Vec<Event>, StoreError> {
    with_deadline(limit, store.scan(query)).await
}
