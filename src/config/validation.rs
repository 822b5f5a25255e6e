//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the log level names something the subscriber understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the manager

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::observability::logging::parse_level;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("log_level must not be empty")]
    EmptyLogLevel,

    #[error("unknown log_level '{0}'")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.log_level.trim();
    if level.is_empty() {
        errors.push(ValidationError::EmptyLogLevel);
    } else if parse_level(level).is_none() {
        errors.push(ValidationError::UnknownLogLevel(config.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
