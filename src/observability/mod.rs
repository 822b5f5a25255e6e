//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Application code:
//!     → LogManager::get_logger(name)
//!     → Logger::{trace,debug,info,warn,error}
//!     → tracing event with `logger` field
//!
//! Consumers:
//!     → fmt subscriber installed by init_logging (stdout)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Named loggers are cheap clones of a shared name
//! - Level filtering belongs to the subscriber, not the logger

pub mod logging;

pub use logging::{init_logging, LogManager, Logger, LoggingError, LoggingProvider, TracingLogger};
