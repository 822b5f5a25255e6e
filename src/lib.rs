//! Shared application runtime: configuration lookup and named logging.

pub mod app;
pub mod config;
pub mod observability;

pub use config::{AppConfig, ConfigManager, ConfigProvider};
pub use observability::{LogManager, Logger, LoggingProvider};
