//! Read-side views over stored events
//!
//! Grouping happens in process over [`EventStore`](crate::store::EventStore)
//! scans. The grouping functions in [`grouping`] are pure and operate on event
//! slices; [`AggregationEngine`] and [`SuspiciousActivityDetector`] pair them
//! with the right scan for a client.

pub mod constants;
mod detection;
mod engine;
pub mod grouping;
mod types;

#[cfg(test)]
mod tests;

pub use detection::SuspiciousActivityDetector;
pub use engine::AggregationEngine;
pub use types::*;
