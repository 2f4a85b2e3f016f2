pub mod config;
pub mod telemetry;

pub use config::{AppConfig, SourceType};
pub use telemetry::init_tracing;
