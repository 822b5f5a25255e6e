//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global subscriber from configuration
//! - Hand out named logger handles
//! - Map configured level names onto `tracing` levels
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - Log level configurable via config, `RUST_LOG` takes precedence
//! - The logger name travels as a `logger` field on every event

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::{LogFormat, LoggingConfig};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),

    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Parse a level name, case-insensitively.
///
/// `warning` and `critical` are accepted as aliases of `warn` and `error`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "error" | "critical" => Some(LevelFilter::ERROR),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

/// Install the global subscriber.
///
/// Fails if `level` is not a known level name or a global subscriber is
/// already set.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<(), LoggingError> {
    let max_level =
        parse_level(level).ok_or_else(|| LoggingError::InvalidLevel(level.to_string()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(max_level.to_string()));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(config.ansi)
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(config.ansi)
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(config.with_target))
            .try_init(),
    };

    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

/// A handle that accepts leveled messages.
pub trait Logger {
    fn log(&self, level: Level, message: &str);

    fn trace(&self, message: &str) {
        self.log(Level::TRACE, message);
    }

    fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }
}

/// Factory for named loggers.
pub trait LoggingProvider {
    type Logger: Logger;

    fn get_logger(&self, name: &str) -> Self::Logger;
}

/// Logger backed by the global `tracing` dispatcher.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: Arc<str>,
}

impl TracingLogger {
    pub fn new(name: &str) -> Self {
        Self { name: Arc::from(name) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        let logger = &*self.name;
        match level {
            Level::TRACE => tracing::trace!(logger, "{}", message),
            Level::DEBUG => tracing::debug!(logger, "{}", message),
            Level::INFO => tracing::info!(logger, "{}", message),
            Level::WARN => tracing::warn!(logger, "{}", message),
            _ => tracing::error!(logger, "{}", message),
        }
    }
}

/// Issues named loggers; the same name always yields the same handle.
#[derive(Debug, Default)]
pub struct LogManager {
    loggers: DashMap<String, TracingLogger>,
}

impl LogManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_logger(&self, name: &str) -> TracingLogger {
        if let Some(existing) = self.loggers.get(name) {
            return existing.value().clone();
        }
        self.loggers
            .entry(name.to_string())
            .or_insert_with(|| TracingLogger::new(name))
            .value()
            .clone()
    }

    /// Names of every logger issued so far, sorted.
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }
}

impl LoggingProvider for LogManager {
    type Logger = TracingLogger;

    fn get_logger(&self, name: &str) -> TracingLogger {
        LogManager::get_logger(self, name)
    }
}
