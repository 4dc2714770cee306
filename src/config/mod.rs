//! Service configuration: defaults, overridden by `config.toml`, overridden
//! by command-line flags and environment variables.

mod io;
mod types;

pub use io::{default_config_path, load_config, parse_config};
pub use types::{
    AuthConfig, ConfigOverrides, ServerConfig, ServiceConfig, StoreBackend, StoreConfig,
    DEFAULT_ADDR, DEFAULT_CORS_ORIGINS, DEFAULT_OWNER_HEADER, DEFAULT_TABLE_NAME,
};

use std::path::PathBuf;
use thiserror::Error;
use tonic::metadata::AsciiMetadataKey;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ServiceConfig {
    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let table = &self.store.table_name;
        if table.is_empty() || table.contains(['/', '\\']) || table.starts_with('.') {
            return Err(ConfigError::Invalid(format!(
                "store.table_name '{table}' must be a plain file name"
            )));
        }
        let header = &self.auth.owner_header;
        if header.parse::<AsciiMetadataKey>().is_err() || header.ends_with("-bin") {
            return Err(ConfigError::Invalid(format!(
                "auth.owner_header '{header}' is not a valid ASCII metadata key"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
