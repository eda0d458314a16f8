pub mod analytics;
pub mod cli;
pub mod conf;
pub mod event;
pub mod ingest;
pub mod logging;
pub mod parse;
pub mod shipper;
pub mod store;
