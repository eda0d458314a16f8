use crate::analytics::{
    AggregationEngine, EndpointCount, EndpointHealth, HourlyErrorCounts, HourlyRequestCounts,
    StatusCodeCounts, SuspiciousActivityDetector, SuspiciousIp,
};
use crate::cli::config::{dump_json, dump_yaml};
use crate::cli::render::render_pretty;
use crate::event::ClientId;
use crate::ingest::{IngestSummary, Ingestor};
use crate::store::MemoryEventStore;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
    Yaml,
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub file: PathBuf,
    pub client_id: String,
    pub threshold: u64,
    pub format: OutputFormat,
}

/// Every analytics view for one client, computed from a single log file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub client_id: ClientId,
    pub ingest: IngestSummary,
    pub status_code_counts: StatusCodeCounts,
    pub request_counts_by_hour: HourlyRequestCounts,
    pub error_counts_by_hour: HourlyErrorCounts,
    pub top_endpoints: Vec<EndpointCount>,
    pub endpoint_health: Vec<EndpointHealth>,
    pub suspicious_ip_threshold: u64,
    pub suspicious_ips: Vec<SuspiciousIp>,
}

/// Ingests `file` into a fresh in-memory store and runs every view over it.
pub async fn build_report(file: &Path, client_id: &ClientId, threshold: u64) -> Result<Report> {
    let store = Arc::new(MemoryEventStore::new());
    let ingest = Ingestor::new(store.clone())
        .ingest_file(client_id, file)
        .await?;

    let engine = AggregationEngine::new(store.clone());
    let detector = SuspiciousActivityDetector::new(store);

    if !engine.client_exists(client_id).await? {
        warn!(file = %file.display(), "no access-log records found");
    }

    Ok(Report {
        client_id: client_id.clone(),
        ingest,
        status_code_counts: engine.status_code_counts(client_id).await?,
        request_counts_by_hour: engine.request_counts_by_hour(client_id).await?,
        error_counts_by_hour: engine.error_counts_by_hour(client_id).await?,
        top_endpoints: engine.top_endpoints().await?,
        endpoint_health: engine.endpoint_health(client_id).await?,
        suspicious_ip_threshold: threshold,
        suspicious_ips: detector.suspicious_ips(client_id, threshold).await?,
    })
}

pub fn run(opts: ReportOptions) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    let client_id = ClientId::new(opts.client_id);
    let report = runtime.block_on(build_report(&opts.file, &client_id, opts.threshold))?;

    match opts.format {
        OutputFormat::Json => dump_json(&report),
        OutputFormat::Yaml => dump_yaml(&report),
        OutputFormat::Pretty => {
            print!("{}", render_pretty(&report, io::stdout().is_terminal()));
            Ok(())
        }
    }
}
