use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShipperError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write cursor file {path}: {source}")]
    Cursor {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("upload request failed: {0}")]
    Upload(#[from] reqwest::Error),

    #[error("upload timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("upload rejected with HTTP {status}")]
    Rejected { status: u16 },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
