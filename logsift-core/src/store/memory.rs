use crate::event::{ClientId, Event};
use crate::store::{EventStore, ScanQuery, StoreError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Append-only in-process store.
///
/// Events are kept in one vector so that scans across clients still come
/// back in global insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    events: Arc<RwLock<Vec<Event>>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn insert(&self, event: Event) -> Result<(), StoreError> {
        if event.client_id().is_empty() {
            return Err(StoreError::Backend(
                "refusing to store an event without a client id".to_string(),
            ));
        }
        self.events.write().await.push(event);
        Ok(())
    }

    async fn scan(&self, query: &ScanQuery) -> Result<Vec<Event>, StoreError> {
        let events = self.events.read().await;
        Ok(events.iter().filter(|e| query.matches(e)).cloned().collect())
    }

    async fn client_exists(&self, client_id: &ClientId) -> Result<bool, StoreError> {
        let events = self.events.read().await;
        Ok(events.iter().any(|e| e.client_id() == client_id))
    }

    async fn delete_by_client(&self, client_id: &ClientId) -> Result<usize, StoreError> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.client_id() != client_id);
        Ok(before - events.len())
    }
}
