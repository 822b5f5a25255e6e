//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Keys the schema does not name are kept verbatim so applications can
//! still look them up through the manager.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level name (trace, debug, info, warn/warning, error/critical).
    pub log_level: String,

    /// Output settings for the log subscriber.
    pub logging: LoggingConfig,

    /// Every other top-level key.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "INFO".to_string(),
            logging: LoggingConfig::default(),
            extra: toml::Table::new(),
        }
    }
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Line format.
    pub format: LogFormat,

    /// Colorize output.
    pub ansi: bool,

    /// Include the event target in each line.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            ansi: true,
            with_target: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development.
    #[default]
    Pretty,
    Compact,
    /// Machine-parseable, for production.
    Json,
}

impl LogFormat {
    /// Name as written in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            log_level = "DEBUG"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "DEBUG");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.logging.ansi);
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let config: AppConfig = toml::from_str(
            r#"
            app_name = "demo"

            [database]
            pool_size = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.extra["app_name"].as_str(), Some("demo"));
        assert_eq!(config.extra["database"]["pool_size"].as_integer(), Some(8));
    }
}
