use crate::conf::ShipperConfig;
use crate::event::ClientId;
use crate::shipper::{CursorFile, HttpUploader, ShipperError, TailRead, Uploader, read_new_lines};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    Idle,
    Reading,
    Uploading,
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Disabled,
    MissingFile,
    ReadFailed,
    /// File shrank; the cursor went back to 0 and the next tick re-reads it.
    Rotated,
    NoNewLines,
    Shipped { lines: usize, offset: u64 },
    /// Cursor unchanged; the same range is retried next tick.
    UploadFailed { lines: usize },
}

/// Tails one file and forwards new lines on a fixed interval.
pub struct ShipperAgent {
    enabled: bool,
    client_id: ClientId,
    log_file: PathBuf,
    interval: Duration,
    upload_timeout: Duration,
    cursor: CursorFile,
    uploader: Arc<dyn Uploader>,
    offset: u64,
    state: AgentState,
}

impl ShipperAgent {
    pub fn new(cfg: &ShipperConfig, uploader: Arc<dyn Uploader>) -> Self {
        Self {
            enabled: cfg.enabled,
            client_id: ClientId::new(cfg.client_id.clone()),
            log_file: cfg.log_file.clone(),
            interval: cfg.interval(),
            upload_timeout: cfg.upload_timeout(),
            cursor: CursorFile::new(cfg.cursor_file.clone()),
            uploader,
            offset: 0,
            state: AgentState::Idle,
        }
    }

    /// Agent wired to the configured HTTP ingestion endpoint.
    pub fn with_http(cfg: &ShipperConfig) -> Result<Self, ShipperError> {
        let uploader = HttpUploader::new(cfg.url.clone(), cfg.upload_timeout())?;
        Ok(Self::new(cfg, Arc::new(uploader)))
    }

    /// Loads the persisted cursor. Call once before the first tick.
    pub async fn resume(&mut self) -> u64 {
        self.offset = self.cursor.load().await;
        self.offset
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn log_file(&self) -> &std::path::Path {
        &self.log_file
    }

    /// Runs one Idle -> Reading -> Uploading -> Idle cycle. Never fails:
    /// every error is logged and reported through the outcome.
    pub async fn tick(&mut self) -> TickOutcome {
        if !self.enabled {
            return TickOutcome::Disabled;
        }

        let outcome = self.read_and_ship().await;
        self.state = AgentState::Idle;
        debug!(?outcome, offset = self.offset, "tick finished");
        outcome
    }

    async fn read_and_ship(&mut self) -> TickOutcome {
        self.state = AgentState::Reading;

        match tokio::fs::try_exists(&self.log_file).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(file = %self.log_file.display(), "log file not found, skipping tick");
                return TickOutcome::MissingFile;
            }
            Err(e) => {
                error!(file = %self.log_file.display(), error = %e, "cannot stat log file");
                return TickOutcome::ReadFailed;
            }
        }

        let (lines, end_offset) = match read_new_lines(&self.log_file, self.offset).await {
            Ok(TailRead::Batch { lines, end_offset }) => (lines, end_offset),
            Ok(TailRead::Rotated { size }) => {
                info!(
                    file = %self.log_file.display(),
                    size,
                    offset = self.offset,
                    "log file shrank, assuming rotation"
                );
                self.offset = 0;
                self.persist(0).await;
                return TickOutcome::Rotated;
            }
            Err(e) => {
                error!(error = %e, "failed to read log file");
                return TickOutcome::ReadFailed;
            }
        };

        if lines.is_empty() {
            return TickOutcome::NoNewLines;
        }

        self.state = AgentState::Uploading;
        let count = lines.len();
        let body = lines.join("\n");

        let result =
            match tokio::time::timeout(self.upload_timeout, self.uploader.upload(&self.client_id, body))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(ShipperError::Timeout(self.upload_timeout)),
            };

        match result {
            Ok(()) => {
                self.offset = end_offset;
                self.persist(end_offset).await;
                info!(
                    client_id = %self.client_id,
                    lines = count,
                    offset = end_offset,
                    "batch shipped"
                );
                TickOutcome::Shipped {
                    lines: count,
                    offset: end_offset,
                }
            }
            Err(e) => {
                warn!(
                    client_id = %self.client_id,
                    lines = count,
                    offset = self.offset,
                    error = %e,
                    "upload failed, will retry"
                );
                TickOutcome::UploadFailed { lines: count }
            }
        }
    }

    // The in-memory offset stays authoritative for this process even if the
    // write fails; a restart re-ships from the last persisted value.
    async fn persist(&self, offset: u64) {
        if let Err(e) = self.cursor.save(offset).await {
            error!(error = %e, offset, "failed to persist cursor");
        }
    }

    /// Ticks on the configured interval until `shutdown` resolves.
    ///
    /// Shutdown is only observed between ticks, so an in-flight upload runs
    /// to completion and ticks never overlap. Returns the final offset.
    pub async fn run<F>(mut self, shutdown: F) -> u64
    where
        F: Future<Output = ()>,
    {
        if !self.enabled {
            info!("shipper disabled, not starting");
            return self.offset;
        }

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!(offset = self.offset, "shipper stopping");
                    break;
                }
                _ = ticker.tick() => {}
            }

            self.tick().await;
        }

        self.offset
    }
}
