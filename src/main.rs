#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use items_service::app::{report_server_error, Args};
use items_service::config::load_config;
use items_service::cors::build_cors_layer;
use items_service::grpc_logging::GrpcLoggingLayer;
use items_service::item::{open_store, ItemController, ItemResolvers};
use items_service::logging::{self, init_logging, LOG_FILENAME};
use items_service::server::{ItemsGrpcService, FILE_DESCRIPTOR_SET};
use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::{info, warn};

#[allow(clippy::print_stderr)]
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_config = args.log_config();
    let log_file = log_config.log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let mut config = load_config(args.config.as_deref()).wrap_err("loading configuration")?;
    config.apply_overrides(args.overrides());
    config.validate().wrap_err("validating configuration")?;

    let addr: SocketAddr = config
        .server
        .addr
        .parse()
        .wrap_err_with(|| format!("invalid listen address '{}'", config.server.addr))?;

    info!("CORS origins: {}", config.server.cors_origins.join(", "));
    let cors = build_cors_layer(config.server.cors_origins.clone());

    let store = open_store(&config.store)
        .await
        .wrap_err("opening item store")?;
    info!(
        backend = ?config.store.backend,
        table = %config.store.table_name,
        "Item store ready"
    );

    let controller = Arc::new(ItemController::new(store));
    let resolvers = ItemResolvers::new(controller);
    let service = ItemsGrpcService::from_auth_config(resolvers, &config.auth);

    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    info!(
        owner_header = %service.owner_header(),
        "Starting items service on {} (gRPC + gRPC-Web)",
        addr
    );

    let server_result = Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(cors)
        .layer(GrpcLoggingLayer)
        .layer(tonic_web::GrpcWebLayer::new())
        .add_service(reflection_service)
        .add_service(service.into_server())
        .serve_with_shutdown(addr, async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl-C, stopping server..."),
                Err(e) => {
                    warn!("Cannot listen for Ctrl-C, running until killed: {e}");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await;

    if let Err(e) = server_result {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("Items service stopped");
    Ok(())
}
