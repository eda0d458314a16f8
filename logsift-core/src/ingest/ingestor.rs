use crate::analytics::constants::DEFAULT_STORE_TIMEOUT;
use crate::event::ClientId;
use crate::ingest::IngestError;
use crate::parse::LineParser;
use crate::store::{EventStore, with_deadline};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub accepted: usize,
    pub skipped: usize,
}

/// Parses uploaded log text and appends the resulting events to the store.
#[derive(Clone)]
pub struct Ingestor {
    store: Arc<dyn EventStore>,
    timeout: Duration,
}

impl Ingestor {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Bound applied to each store write.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ingests every line of `text` for `client_id`.
    ///
    /// Lines that are not access-log records are skipped. A record with a
    /// corrupt timestamp stops the job; events stored before it stay stored.
    pub async fn ingest(
        &self,
        client_id: &ClientId,
        text: &str,
    ) -> Result<IngestSummary, IngestError> {
        if client_id.is_empty() {
            return Err(IngestError::EmptyClientId);
        }

        let parser = LineParser::new(client_id.clone());
        let mut summary = IngestSummary::default();

        for (idx, line) in text.lines().enumerate() {
            match parser.parse(line) {
                Ok(Some(event)) => {
                    with_deadline(self.timeout, self.store.insert(event)).await?;
                    summary.accepted += 1;
                }
                Ok(None) => {
                    tracing::debug!(client_id = %client_id, line = idx + 1, "skipping unrecognised line");
                    summary.skipped += 1;
                }
                Err(source) => {
                    tracing::warn!(
                        client_id = %client_id,
                        line = idx + 1,
                        accepted = summary.accepted,
                        error = %source,
                        "aborting ingestion"
                    );
                    return Err(IngestError::Aborted {
                        line: idx + 1,
                        accepted: summary.accepted,
                        source,
                    });
                }
            }
        }

        tracing::info!(
            client_id = %client_id,
            accepted = summary.accepted,
            skipped = summary.skipped,
            "log text ingested"
        );
        Ok(summary)
    }

    pub async fn ingest_file(
        &self,
        client_id: &ClientId,
        path: &Path,
    ) -> Result<IngestSummary, IngestError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| IngestError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        self.ingest(client_id, &String::from_utf8_lossy(&bytes)).await
    }

    /// Drops everything stored for `client_id`.
    pub async fn reset(&self, client_id: &ClientId) -> Result<usize, IngestError> {
        let removed = with_deadline(self.timeout, self.store.delete_by_client(client_id)).await?;
        tracing::info!(client_id = %client_id, removed, "client events reset");
        Ok(removed)
    }
}
