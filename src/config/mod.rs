//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → manager.rs (ArcSwap, key/value lookup)
//!
//! On reload:
//!     manager.rs asks loader.rs for a new config
//!     → validation.rs validates
//!     → atomic swap of Arc<AppConfig>
//!     → later lookups observe new config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod manager;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use manager::{ConfigManager, ConfigProvider, ConfigValue};
pub use schema::{AppConfig, LogFormat, LoggingConfig};
