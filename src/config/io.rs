use super::types::ServiceConfig;
use super::ConfigError;
use crate::utils::service_home;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the config file (`~/.items-service/config.toml`).
#[must_use]
pub fn default_config_path() -> PathBuf {
    service_home().join("config.toml")
}

/// Parse and validate a TOML config document.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load the service configuration.
///
/// An explicitly given `path` must exist. Without one, the default location
/// is tried and a missing file yields `ServiceConfig::default()`.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (default_config_path(), false),
    };

    if !path.exists() {
        if required {
            return Err(ConfigError::NotFound(path));
        }
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(ServiceConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config = parse_config(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
