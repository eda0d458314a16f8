use crate::analytics::tests::helpers::{at, ev, hour};
use crate::analytics::{AggregationEngine, ErrorCounts};
use crate::event::{ClientId, Event};
use crate::store::{EventStore, MemoryEventStore};
use pretty_assertions::assert_eq;
use std::sync::Arc;

async fn engine_with(events: Vec<Event>) -> AggregationEngine {
    let store = MemoryEventStore::new();
    for e in events {
        store.insert(e).await.unwrap();
    }
    AggregationEngine::new(Arc::new(store))
}

#[tokio::test]
async fn views_are_scoped_to_the_client() {
    // Arrange
    let mut events = ev().client("c1").status(200).at(at(10, 0)).times(2);
    events.extend(ev().client("c2").status(500).at(at(11, 0)).times(4));
    events.push(ev().client("c1").status(404).at(at(10, 15)).build());
    let engine = engine_with(events).await;
    let c1 = ClientId::from("c1");

    // Act
    let statuses = engine.status_code_counts(&c1).await.unwrap();
    let requests = engine.request_counts_by_hour(&c1).await.unwrap();
    let errors = engine.error_counts_by_hour(&c1).await.unwrap();

    // Assert
    assert_eq!(statuses.into_iter().collect::<Vec<_>>(), vec![(200, 2), (404, 1)]);
    assert_eq!(requests.into_iter().collect::<Vec<_>>(), vec![(hour(10), 3)]);
    assert_eq!(
        errors.into_iter().collect::<Vec<_>>(),
        vec![(
            hour(10),
            ErrorCounts {
                count_4xx: 1,
                count_5xx: 0
            }
        )]
    );
}

#[tokio::test]
async fn top_endpoints_is_system_wide() {
    let mut events = ev().client("c1").endpoint("/shared").times(2);
    events.extend(ev().client("c2").endpoint("/shared").times(2));
    events.extend(ev().client("c2").endpoint("/own").times(3));
    let engine = engine_with(events).await;

    let top = engine.top_endpoints().await.unwrap();

    assert_eq!(top[0].endpoint, "/shared");
    assert_eq!(top[0].count, 4);
    assert_eq!(top[1].endpoint, "/own");
    assert_eq!(top[1].count, 3);
}

#[tokio::test]
async fn endpoint_health_ignores_other_clients_traffic() {
    // Arrange: c1 has 5 failing requests, c2 adds 10 more on the same endpoint
    let mut events = ev().client("c1").endpoint("/pay").status(500).times(5);
    events.extend(ev().client("c2").endpoint("/pay").status(500).times(10));
    let engine = engine_with(events).await;

    // Act
    let c1 = engine.endpoint_health(&ClientId::from("c1")).await.unwrap();
    let c2 = engine.endpoint_health(&ClientId::from("c2")).await.unwrap();

    // Assert
    assert!(c1.is_empty());
    assert_eq!(c2.len(), 1);
    assert_eq!(c2[0].error_rate, 1.0);
}

#[tokio::test]
async fn client_exists_reflects_store_contents() {
    let engine = engine_with(vec![ev().client("c1").build()]).await;

    assert!(engine.client_exists(&ClientId::from("c1")).await.unwrap());
    assert!(!engine.client_exists(&ClientId::from("c9")).await.unwrap());
}

#[tokio::test]
async fn unknown_client_yields_empty_views() {
    let engine = engine_with(vec![ev().client("c1").build()]).await;
    let ghost = ClientId::from("ghost");

    assert!(engine.status_code_counts(&ghost).await.unwrap().is_empty());
    assert!(engine.request_counts_by_hour(&ghost).await.unwrap().is_empty());
    assert!(engine.error_counts_by_hour(&ghost).await.unwrap().is_empty());
    assert!(engine.endpoint_health(&ghost).await.unwrap().is_empty());
}
