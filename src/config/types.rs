use crate::utils::service_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default gRPC listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:50051";
/// Default table name (also read from `TABLE_NAME`).
pub const DEFAULT_TABLE_NAME: &str = "items";
/// Default request metadata key carrying the owner identity.
pub const DEFAULT_OWNER_HEADER: &str = "id";
/// Origins allowed for gRPC-Web when none are configured.
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

fn default_addr() -> String {
    DEFAULT_ADDR.to_string()
}

fn default_cors_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.split(',').map(str::to_string).collect()
}

fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

fn default_owner_header() -> String {
    DEFAULT_OWNER_HEADER.to_string()
}

/// `[server]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Allowed gRPC-Web origins; `"*"` allows every origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            cors_origins: default_cors_origins(),
        }
    }
}

/// Which adapter backs the item table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process memory; contents are lost on restart.
    #[default]
    Memory,
    /// JSON document on local disk.
    File,
}

/// `[store]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Directory for file-backed tables (default: `~/.items-service/data`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_table_name")]
    pub table_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_dir: None,
            table_name: default_table_name(),
        }
    }
}

impl StoreConfig {
    /// Location of the file-backed table: `<data_dir>/<table_name>.json`.
    #[must_use]
    pub fn table_path(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| service_home().join("data"))
            .join(format!("{}.json", self.table_name))
    }
}

/// `[auth]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Request metadata key the gateway fills with the caller's identity.
    #[serde(default = "default_owner_header")]
    pub owner_header: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            owner_header: default_owner_header(),
        }
    }
}

/// Top-level service configuration, deserialized from `config.toml`.
///
/// Every table and field is optional; missing values resolve to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Values given on the command line or through the environment. They take
/// precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub addr: Option<String>,
    pub cors_origins: Option<Vec<String>>,
    pub backend: Option<StoreBackend>,
    pub data_dir: Option<PathBuf>,
    pub table_name: Option<String>,
    pub owner_header: Option<String>,
}

impl ServiceConfig {
    /// Layer `overrides` on top of the file values.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(addr) = overrides.addr {
            self.server.addr = addr;
        }
        if let Some(origins) = overrides.cors_origins {
            self.server.cors_origins = origins
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(backend) = overrides.backend {
            self.store.backend = backend;
        }
        if let Some(data_dir) = overrides.data_dir {
            self.store.data_dir = Some(data_dir);
        }
        if let Some(table_name) = overrides.table_name {
            self.store.table_name = table_name;
        }
        if let Some(owner_header) = overrides.owner_header {
            self.auth.owner_header = owner_header;
        }
    }
}
