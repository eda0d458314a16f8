pub mod config;
mod render;
pub mod report;
pub mod ship;
