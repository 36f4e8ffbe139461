mod adapter;
mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;

use adapter::grpc::state::{AppState, DynAccountRepository};
use adapter::grpc::{CompteHandler, CompteServiceServer};
use domain::error::DomainError;
use infrastructure::config::{self, AppConfig, StorageType};
use infrastructure::logging;
use infrastructure::persistence;
use tokio::runtime::Handle;
use tonic::transport::Server;

/// Initialize storage based on configuration
fn init_storage(app_config: &AppConfig, runtime: &Handle) -> anyhow::Result<DynAccountRepository> {
    match app_config.storage.storage_type {
        StorageType::Sqlite => {
            tracing::info!("Using SQLite storage backend");
            let db = persistence::sqlite::init_database(&app_config.storage.sqlite.effective_path())?;

            Ok(Box::new(persistence::sqlite::SqliteAccountRepository::new(db)))
        }
        StorageType::Mongodb => {
            tracing::info!("Using MongoDB storage backend");

            let mongo_config = &app_config.storage.mongodb;
            if mongo_config.database.is_empty() {
                return Err(DomainError::Config("storage.mongodb.database is empty".to_string()).into());
            }

            let conn = runtime.block_on(persistence::mongodb::init_mongodb(
                &mongo_config.uri,
                &mongo_config.database,
            ))?;

            Ok(Box::new(persistence::mongodb::MongoAccountRepository::new(
                conn,
                runtime.clone(),
            )))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let handler = CompteHandler::new(&state);

    tracing::info!(
        "Serving {} on {}",
        adapter::grpc::proto::compte_service_server::SERVICE_NAME,
        addr
    );

    Server::builder()
        .add_service(CompteServiceServer::new(handler))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

pub fn run() -> anyhow::Result<()> {
    // Configuration first: it decides the logging mode
    let app_config = config::app();
    logging::setup(app_config.logging.production);
    config::init();

    let addr = app_config.server.socket_addr()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // Initialize storage based on config
    let storage = init_storage(app_config, runtime.handle())?;
    let state = AppState::new(storage);

    runtime.block_on(serve(addr, state))
}
