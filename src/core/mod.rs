mod config;
mod telemetry;
pub use config::AppConfig;
pub use telemetry::init_tracing;
