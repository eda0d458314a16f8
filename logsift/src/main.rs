use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use logsift_core::analytics::constants::DEFAULT_SUSPICIOUS_THRESHOLD;
use logsift_core::cli;
use logsift_core::cli::report::{OutputFormat, ReportOptions};
use logsift_core::conf::DEFAULT_CONFIG_PATH;
use logsift_core::logging::{LogMode, default_log_mode, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logsift",
    version,
    about = "Logsift: access-log analytics and log shipping agent"
)]
struct Cli {
    /// Emit logs as JSON regardless of terminal
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tail the configured log file and upload new lines until Ctrl-C
    Ship {
        /// Path to the Logsift config file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Analyze a local access log and print every report view
    Report(ReportArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Access log to analyze
    file: PathBuf,

    /// Client the events are recorded under
    #[arg(long, default_value = "local")]
    client_id: String,

    /// Auth failures per IP per hour before the IP is flagged
    #[arg(long, default_value_t = DEFAULT_SUSPICIOUS_THRESHOLD)]
    threshold: u64,

    /// Output as JSON
    #[arg(long, conflicts_with_all = ["yaml", "pretty"])]
    json: bool,

    /// Output as YAML
    #[arg(long, conflicts_with = "pretty")]
    yaml: bool,

    /// Human-readable output (default)
    #[arg(long)]
    pretty: bool,
}

impl ReportArgs {
    fn into_options(self) -> ReportOptions {
        let format = if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Pretty
        };

        ReportOptions {
            file: self.file,
            client_id: self.client_id,
            threshold: self.threshold,
            format,
        }
    }
}

fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Ship { config } => cli::ship::run(&config),
        Command::Report(args) => cli::report::run(args.into_options()),
        Command::Config { cmd } => cli::config::run(cmd),
    }
}

fn main() {
    let cli = Cli::parse();

    let mode = if cli.json_logs {
        LogMode::Json
    } else {
        default_log_mode()
    };
    init_logging(mode);

    if let Err(e) = dispatch(cli.command) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
