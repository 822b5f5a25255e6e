//! Key/value access to the active configuration.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::AppConfig;

/// Lookup-by-key access to configuration values.
pub trait ConfigProvider {
    /// Resolved value; only needs to be printable.
    type Value: fmt::Display;
    type Error: std::error::Error;

    /// Resolve `key` to its value.
    fn get_value(&self, key: &str) -> Result<Self::Value, Self::Error>;
}

/// A configuration value as stored in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue(toml::Value);

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    pub fn into_inner(self) -> toml::Value {
        self.0
    }
}

impl From<toml::Value> for ConfigValue {
    fn from(value: toml::Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            // Strings print bare, without TOML quoting.
            toml::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Holds the active configuration and swaps it atomically on reload.
///
/// Readers never block: each lookup works on the snapshot current at the
/// time of the call.
pub struct ConfigManager {
    current: ArcSwap<AppConfig>,
}

impl ConfigManager {
    pub fn new(config: AppConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
        }
    }

    /// Load and validate a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(load_config(path)?))
    }

    /// The configuration currently in effect.
    pub fn snapshot(&self) -> Arc<AppConfig> {
        self.current.load_full()
    }

    /// Replace the active configuration with the contents of `path`.
    ///
    /// On any error the current configuration stays in place.
    pub fn reload(&self, path: &Path) -> Result<(), ConfigError> {
        match load_config(path) {
            Ok(config) => {
                self.current.store(Arc::new(config));
                tracing::info!(path = ?path, "Configuration reloaded");
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    path = ?path,
                    error = %e,
                    "Failed to reload config. Keeping current configuration."
                );
                Err(e)
            }
        }
    }

    /// Look up a dot-separated key such as `log_level` or `logging.format`.
    ///
    /// A top-level key that itself contains dots (`"dotted.key" = 1`) is
    /// matched whole before the key is split into a path.
    pub fn get_value(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }

        let snapshot = self.current.load();
        if let Some(value) = top_level(&snapshot, key) {
            return Ok(ConfigValue(value));
        }

        let not_found = || ConfigError::KeyNotFound(key.to_string());
        let mut segments = key.split('.');
        let first = segments.next().ok_or_else(not_found)?;
        let root = top_level(&snapshot, first).ok_or_else(not_found)?;

        let mut node = &root;
        for segment in segments {
            node = node
                .as_table()
                .and_then(|table| table.get(segment))
                .ok_or_else(not_found)?;
        }

        Ok(ConfigValue(node.clone()))
    }
}

/// Resolve one top-level key against the typed config.
fn top_level(config: &AppConfig, name: &str) -> Option<toml::Value> {
    match name {
        "log_level" => Some(toml::Value::String(config.log_level.clone())),
        "logging" => {
            let logging = &config.logging;
            let mut table = toml::Table::new();
            table.insert("format".into(), logging.format.as_str().into());
            table.insert("ansi".into(), logging.ansi.into());
            table.insert("with_target".into(), logging.with_target.into());
            Some(toml::Value::Table(table))
        }
        _ => config.extra.get(name).cloned(),
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl ConfigProvider for ConfigManager {
    type Value = ConfigValue;
    type Error = ConfigError;

    fn get_value(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        ConfigManager::get_value(self, key)
    }
}
