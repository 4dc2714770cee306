//! Command-line surface of the `items-service` binary.

use crate::config::{ConfigOverrides, StoreBackend};
use crate::logging::{default_log_dir, parse_rotation, LogConfig};
use clap::Parser;
use std::path::PathBuf;

/// Items service - ownership-enforcing CRUD over gRPC and gRPC-Web
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML config file (default: ~/.items-service/config.toml)
    #[arg(short, long, env = "ITEMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(short, long, env = "ITEMS_ADDR")]
    pub addr: Option<String>,

    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins (not recommended for production).
    #[arg(long, env = "ITEMS_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    /// Storage backend for the item table
    #[arg(long, env = "ITEMS_STORE", value_enum)]
    pub store: Option<StoreBackend>,

    /// Directory holding file-backed tables
    #[arg(long, env = "ITEMS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Name of the item table
    #[arg(long, env = "TABLE_NAME")]
    pub table_name: Option<String>,

    /// Request metadata key carrying the caller's identity
    #[arg(long, env = "ITEMS_OWNER_HEADER")]
    pub owner_header: Option<String>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "ITEMS_LOG_JSON", default_value = "false")]
    pub log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "ITEMS_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,

    /// Custom log directory (default: ~/.items-service/logs)
    #[arg(long, env = "ITEMS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// The flags that override config file values.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            addr: self.addr.clone(),
            cors_origins: self.cors_origins.clone(),
            backend: self.store,
            data_dir: self.data_dir.clone(),
            table_name: self.table_name.clone(),
            owner_header: self.owner_header.clone(),
        }
    }

    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            log_dir: self.log_dir.clone().unwrap_or_else(default_log_dir),
            json_format: self.log_json,
            rotation: parse_rotation(&self.log_rotation),
            ..LogConfig::default()
        }
    }
}

/// Print a startup failure with hints to stderr.
#[allow(clippy::print_stderr)]
pub fn report_server_error(
    addr: std::net::SocketAddr,
    log_file: &std::path::Path,
    e: &tonic::transport::Error,
) {
    let err_string = format!("{e:?}");
    if err_string.contains("AddrInUse") {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of items-service may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Use a different port:        items-service --addr 127.0.0.1:50052");
        eprintln!("  2. Check what's using the port: lsof -i :{}", addr.port());
        eprintln!();
    } else {
        eprintln!();
        eprintln!("Error: Failed to start server: {e}");
        eprintln!();
    }
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_means_no_overrides() {
        let args = Args::try_parse_from(["items-service"]).unwrap();
        let overrides = args.overrides();
        assert!(overrides.addr.is_none());
        assert!(overrides.backend.is_none());
        assert!(overrides.cors_origins.is_none());
        assert!(!args.log_json);
    }

    #[test]
    fn test_flags_become_overrides() {
        let args = Args::try_parse_from([
            "items-service",
            "--addr",
            "0.0.0.0:6000",
            "--store",
            "file",
            "--table-name",
            "niners",
            "--cors-origins",
            "http://a,http://b",
            "--owner-header",
            "x-user",
        ])
        .unwrap();
        let overrides = args.overrides();
        assert_eq!(overrides.addr.as_deref(), Some("0.0.0.0:6000"));
        assert_eq!(overrides.backend, Some(StoreBackend::File));
        assert_eq!(overrides.table_name.as_deref(), Some("niners"));
        assert_eq!(
            overrides.cors_origins,
            Some(vec!["http://a".to_string(), "http://b".to_string()])
        );
        assert_eq!(overrides.owner_header.as_deref(), Some("x-user"));
    }

    #[test]
    fn test_log_config_from_flags() {
        let args = Args::try_parse_from([
            "items-service",
            "--log-json",
            "--log-dir",
            "/tmp/items-logs",
        ])
        .unwrap();
        let log = args.log_config();
        assert!(log.json_format);
        assert_eq!(log.log_dir, PathBuf::from("/tmp/items-logs"));
    }
}
