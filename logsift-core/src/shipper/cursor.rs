use crate::shipper::ShipperError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Single-value side file holding the shipped byte offset.
#[derive(Debug, Clone)]
pub struct CursorFile {
    path: PathBuf,
}

impl CursorFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable cursors start from the beginning of the file.
    pub async fn load(&self) -> u64 {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return 0,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cursor unreadable, starting at 0");
                return 0;
            }
        };

        match raw.trim().parse::<u64>() {
            Ok(offset) => offset,
            Err(_) => {
                warn!(
                    path = %self.path.display(),
                    contents = %raw.trim(),
                    "cursor unparsable, starting at 0"
                );
                0
            }
        }
    }

    pub async fn save(&self, offset: u64) -> Result<(), ShipperError> {
        tokio::fs::write(&self.path, offset.to_string())
            .await
            .map_err(|source| ShipperError::Cursor {
                path: self.path.clone(),
                source,
            })
    }
}
