mod init;
pub use init::{init_logging, parse_level, parse_rotation};
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::rolling::Rotation;

use crate::config::LoggingConfig;
use crate::utils::get_catalog_home;

/// Log filename used by the catalog binary.
pub const LOG_FILENAME: &str = "catalog.log";
/// Global log file path, set once at startup.
static LOG_FILE_PATH: OnceLock<String> = OnceLock::new();
/// Store the log file path for later retrieval. Only the first call wins.
pub fn set_log_file_path(path: String) {
    if LOG_FILE_PATH.set(path).is_err() {
        tracing::debug!("Log file path already set");
    }
}
/// Get the log file path set at startup.
#[must_use]
pub fn get_log_file_path() -> &'static str {
    LOG_FILE_PATH.get().map_or("", String::as_str)
}
/// Default log directory (`~/.catalog/logs`).
#[must_use]
pub fn default_log_dir() -> PathBuf {
    get_catalog_home().join("logs")
}
/// Configuration for the logging system.
#[derive(Debug)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            log_dir: config.dir.clone().unwrap_or_else(default_log_dir),
            log_level: parse_level(&config.level),
            json_format: config.json,
            rotation: parse_rotation(&config.rotation),
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
