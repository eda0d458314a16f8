use crate::conf::load_config;
use crate::shipper::ShipperAgent;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Runs the shipper until Ctrl-C.
pub fn run(config_path: &Path) -> Result<()> {
    let cfg = load_config(config_path)?;

    if !cfg.shipper.enabled {
        info!(config = %config_path.display(), "shipper disabled in config, nothing to do");
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(async {
        let mut agent = ShipperAgent::with_http(&cfg.shipper)?;
        let offset = agent.resume().await;

        info!(
            client_id = %agent.client_id(),
            file = %agent.log_file().display(),
            url = %cfg.shipper.url,
            interval_ms = cfg.shipper.interval_ms,
            offset,
            "shipper started"
        );

        let final_offset = agent.run(shutdown_signal()).await;
        info!(offset = final_offset, "shipper stopped");

        Ok::<_, anyhow::Error>(())
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C, stopping");
    }
}
