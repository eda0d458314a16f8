use crate::event::{ClientId, Event};
use crate::store::{EventStore, MemoryEventStore, ScanQuery, StoreError, scan_with_timeout};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 19)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn event(client: &str, ip: &str, endpoint: &str, status: u16, ts: NaiveDateTime) -> Event {
    Event::new(ClientId::from(client), ip, "GET", endpoint, status, 0, ts)
}

async fn seeded() -> MemoryEventStore {
    let store = MemoryEventStore::new();
    store.insert(event("c1", "1.1.1.1", "/a", 200, at(10, 0))).await.unwrap();
    store.insert(event("c2", "2.2.2.2", "/b", 401, at(10, 30))).await.unwrap();
    store.insert(event("c1", "1.1.1.1", "/b", 403, at(11, 0))).await.unwrap();
    store.insert(event("c1", "3.3.3.3", "/a", 500, at(12, 0))).await.unwrap();
    store
}

fn endpoints(events: &[Event]) -> Vec<&str> {
    events.iter().map(Event::endpoint).collect()
}

#[tokio::test]
async fn scan_all_keeps_insertion_order() {
    // Arrange
    let store = seeded().await;

    // Act
    let events = store.scan(&ScanQuery::all()).await.unwrap();

    // Assert
    assert_eq!(endpoints(&events), vec!["/a", "/b", "/b", "/a"]);
}

#[tokio::test]
async fn scan_filters_by_client_and_status() {
    let store = seeded().await;
    let query = ScanQuery::for_client(&ClientId::from("c1")).with_status_codes(&[401, 403]);

    let events = store.scan(&query).await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].status_code(), 403);
}

#[tokio::test]
async fn scan_filters_by_endpoint_ip_and_time() {
    let store = seeded().await;

    let by_endpoint = store.scan(&ScanQuery::all().with_endpoint("/a")).await.unwrap();
    let by_ip = store
        .scan(&ScanQuery::all().with_ip_address("1.1.1.1"))
        .await
        .unwrap();
    let by_time = store
        .scan(&ScanQuery::all().between(at(10, 30), at(12, 0)))
        .await
        .unwrap();

    assert_eq!(by_endpoint.len(), 2);
    assert_eq!(by_ip.len(), 2);
    // until is exclusive
    assert_eq!(endpoints(&by_time), vec!["/b", "/b"]);
}

#[tokio::test]
async fn client_exists_tracks_stored_events() {
    let store = seeded().await;

    assert!(store.client_exists(&ClientId::from("c1")).await.unwrap());
    assert!(!store.client_exists(&ClientId::from("nobody")).await.unwrap());
}

#[tokio::test]
async fn delete_by_client_removes_only_that_client() {
    // Arrange
    let store = seeded().await;

    // Act
    let removed = store.delete_by_client(&ClientId::from("c1")).await.unwrap();

    // Assert
    assert_eq!(removed, 3);
    assert_eq!(store.len().await, 1);
    assert!(!store.client_exists(&ClientId::from("c1")).await.unwrap());
    assert!(store.client_exists(&ClientId::from("c2")).await.unwrap());
}

#[tokio::test]
async fn insert_rejects_blank_client_id() {
    // Arrange
    let store = MemoryEventStore::new();

    // Act
    let err = store
        .insert(event(" ", "1.1.1.1", "/a", 200, at(12, 0)))
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(err, StoreError::Backend(_)), "{err:?}");
    assert!(store.is_empty().await);
}

struct StalledStore;

#[async_trait]
impl EventStore for StalledStore {
    async fn insert(&self, _event: Event) -> Result<(), StoreError> {
        Ok(())
    }

    async fn scan(&self, _query: &ScanQuery) -> Result<Vec<Event>, StoreError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }

    async fn client_exists(&self, _client_id: &ClientId) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn delete_by_client(&self, _client_id: &ClientId) -> Result<usize, StoreError> {
        Ok(0)
    }
}

#[tokio::test(start_paused = true)]
async fn scan_with_timeout_surfaces_stalled_store() {
    let limit = Duration::from_millis(50);

    let err = scan_with_timeout(&StalledStore, &ScanQuery::all(), limit)
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Timeout(d) if d == limit));
}
