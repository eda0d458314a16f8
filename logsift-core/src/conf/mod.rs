mod error;
mod loader;
pub mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_PATH, load_config, parse_config};
pub use types::{LogsiftConfig, ShipperConfig};
pub use validation::{RangeConstraint, validate};
