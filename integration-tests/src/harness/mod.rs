pub mod fixtures;
pub mod tracing;

pub use fixtures::{AccessLine, LogFile};
pub use self::tracing::{CapturedEvent, CapturedEvents, init_test_tracing};
