//! Incremental log tailing and forwarding.
//!
//! The agent wakes on a fixed interval, reads whatever was appended to the
//! tailed file since the stored cursor, and uploads it as one batch. The
//! cursor only moves after the receiving side accepts the batch, so delivery
//! is at-least-once.

mod agent;
mod cursor;
mod error;
mod tail;
mod upload;

#[cfg(test)]
mod tests;

pub use agent::{AgentState, ShipperAgent, TickOutcome};
pub use cursor::CursorFile;
pub use error::ShipperError;
pub use tail::{TailRead, read_new_lines};
pub use upload::{HttpUploader, UPLOAD_FILE_NAME, Uploader};
