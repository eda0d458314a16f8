//! Event storage boundary
//!
//! The aggregation and detection code only relies on [`EventStore`]: append,
//! filtered scan in insertion order, existence check, and bulk delete by
//! client. [`MemoryEventStore`] is the bundled implementation.

mod error;
mod memory;
mod query;
mod traits;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use memory::MemoryEventStore;
pub use query::ScanQuery;
pub use traits::{EventStore, scan_with_timeout, with_deadline};
