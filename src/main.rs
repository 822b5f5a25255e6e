//! appcore
//!
//! Loads the application configuration, installs the log subscriber and
//! reports the effective log level on the `main` logger.
//!
//! ```text
//!   config.toml ─▶ loader ─▶ validation ─▶ ConfigManager ──┐
//!                                  │                       ├─▶ app::run ─▶ "current log level is .."
//!                                  └─▶ init_logging ─▶ LogManager ──┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use appcore::app;
use appcore::config::loader::{apply_log_level_override, load_config};
use appcore::config::{AppConfig, ConfigManager};
use appcore::observability::{init_logging, LogManager};

#[derive(Parser)]
#[command(name = "appcore")]
#[command(about = "Load configuration and report the effective log level", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    apply_log_level_override(&mut config, cli.log_level)?;

    init_logging(&config.log_level, &config.logging)?;

    tracing::info!(
        config_path = ?cli.config,
        log_level = %config.log_level,
        format = ?config.logging.format,
        "Configuration loaded"
    );

    let config = ConfigManager::new(config);
    let logs = LogManager::new();
    app::run(&config, &logs)?;

    Ok(())
}
