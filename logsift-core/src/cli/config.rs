use crate::conf::{DEFAULT_CONFIG_PATH, load_config};
use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to config file
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },

    /// Print resolved configuration, defaults included
    Dump {
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path),
        ConfigCmd::Dump { path, json, yaml } => dump(path, json, yaml),
    }
}

pub fn check(path: PathBuf) -> Result<()> {
    let cfg = load_config(&path)?;
    let shipper = &cfg.shipper;

    println!("✔ Config loaded successfully");
    println!(
        "✔ shipper {}",
        if shipper.enabled { "enabled" } else { "disabled" }
    );
    println!("✔ client {}", shipper.client_id);
    println!(
        "✔ tailing {} every {}ms",
        shipper.log_file.display(),
        shipper.interval_ms
    );
    println!("✔ uploading to {}", shipper.url);

    Ok(())
}

pub fn dump(path: PathBuf, json: bool, yaml: bool) -> Result<()> {
    let cfg = load_config(&path)?;

    if yaml && !json {
        dump_yaml(&cfg)
    } else {
        dump_json(&cfg)
    }
}

pub(crate) fn dump_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub(crate) fn dump_yaml<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
