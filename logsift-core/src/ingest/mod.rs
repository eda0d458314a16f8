mod error;
mod ingestor;


pub use error::IngestError;
pub use ingestor::{IngestSummary, Ingestor};
