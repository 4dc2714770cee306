//! Tracing setup: stdout plus a rolling log file.

mod init;
pub use init::{init_logging, parse_rotation};
use crate::utils::service_home;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::rolling::Rotation;

/// Log filename used by the service.
pub const LOG_FILENAME: &str = "items-service.log";

/// Global log file path, set once at startup.
static LOG_FILE_PATH: OnceLock<String> = OnceLock::new();

/// Store the log file path so error responses can point at it.
pub fn set_log_file_path(path: String) {
    drop(LOG_FILE_PATH.set(path));
}

/// The log file path set at startup, or `""` before that.
pub fn get_log_file_path() -> &'static str {
    LOG_FILE_PATH.get().map_or("", String::as_str)
}

/// Default log directory: `~/.items-service/logs`.
#[must_use]
pub fn default_log_dir() -> PathBuf {
    service_home().join("logs")
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
