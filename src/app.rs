//! Startup report: logs the effective log level.

use crate::config::ConfigProvider;
use crate::observability::{Logger, LoggingProvider};

/// Configuration key read by [`run`].
pub const LOG_LEVEL_KEY: &str = "log_level";

/// Name of the logger [`run`] writes to.
pub const MAIN_LOGGER: &str = "main";

/// Read `log_level` and report it on the `main` logger at debug level.
///
/// Lookup failures are returned exactly as the provider produced them.
pub fn run<C, L>(config: &C, logs: &L) -> Result<(), C::Error>
where
    C: ConfigProvider + ?Sized,
    L: LoggingProvider + ?Sized,
{
    let log_level = config.get_value(LOG_LEVEL_KEY)?;
    let log = logs.get_logger(MAIN_LOGGER);
    log.debug(&format!("current log level is {}", log_level));
    Ok(())
}
