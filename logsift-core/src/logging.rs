use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logging system.
///
/// - Filtering comes from `RUST_LOG` (defaults to "info" if not set)
/// - Output goes to stderr so report output on stdout stays clean
/// - `Json` flattens event fields for cleaner structured output
pub fn init_logging(mode: LogMode) {
    match mode {
        LogMode::Json => fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        LogMode::Pretty => fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .compact()
            .init(),
    }
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Pretty,
    Json,
}
