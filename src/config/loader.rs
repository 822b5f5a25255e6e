//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Errors raised while loading or querying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Lookup of a key the configuration does not define.
    #[error("configuration key not found: {0}")]
    KeyNotFound(String),

    #[error("configuration key must not be empty")]
    EmptyKey,
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Replace `log_level` with `level`, if given, and revalidate.
///
/// On failure `config` keeps the rejected level; callers are expected to
/// abort rather than continue with it.
pub fn apply_log_level_override(
    config: &mut AppConfig,
    level: Option<String>,
) -> Result<(), ConfigError> {
    if let Some(level) = level {
        config.log_level = level;
        validate_config(config).map_err(ConfigError::Validation)?;
    }
    Ok(())
}
