mod atomic;

pub use atomic::atomic_write;

use std::path::PathBuf;

/// Name of the per-user directory holding config, data and logs.
pub const SERVICE_FOLDER: &str = ".items-service";

/// Get the per-user service directory (`~/.items-service`).
///
/// If `ITEMS_SERVICE_HOME` is set, that directory is used instead, so tests
/// and CI never touch the real home directory.
#[must_use]
pub fn service_home() -> PathBuf {
    if let Some(home) = std::env::var_os("ITEMS_SERVICE_HOME") {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SERVICE_FOLDER)
}
