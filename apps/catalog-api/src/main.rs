//! Catalog API - products and users behind bearer-token auth

use axum_helpers::{TokenIssuer, create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{close, connect_from_config_with_retry, run_migrations};
use eyre::OptionExt;
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod state;

use config::{Config, StorageBackend};
use state::{AppState, Storage};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let storage = match config.storage {
        StorageBackend::Postgres => {
            let postgres = config
                .postgres
                .as_ref()
                .ok_or_eyre("Postgres backend selected without a database configuration")?;

            let db = connect_from_config_with_retry(postgres, None).await?;
            run_migrations::<Migrator>(&db, env!("CARGO_PKG_NAME")).await?;
            Storage::Postgres(db)
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; data is lost on shutdown");
            Storage::Memory
        }
    };

    let state = AppState {
        storage,
        tokens: TokenIssuer::new(&config.jwt),
    };

    let router = create_router(api::routes(&state));

    info!(
        storage = %config.storage,
        "Starting Catalog API on {}",
        config.server.address()
    );

    create_app(
        router,
        &config.server,
        Duration::from_secs(30),
        async move {
            if let Storage::Postgres(db) = state.storage {
                info!("Shutting down: closing PostgreSQL pool");
                close(db).await;
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
