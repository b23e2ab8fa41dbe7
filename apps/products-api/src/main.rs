//! Products API - REST server for the product catalog

use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        "Starting Products API"
    );

    // Connect to PostgreSQL with retry
    let db = connect_from_config_with_retry(config.database.clone(), None).await?;
    run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.server);

    info!(
        "Starting Products API on port {} (shutdown timeout {:?})",
        state.config.server.port, state.config.server.shutdown_timeout
    );

    let db = state.db.clone();
    create_production_app(router, &state.config.server, async move {
        info!("Shutting down: closing PostgreSQL connections");
        match db.close().await {
            Ok(()) => info!("PostgreSQL connection closed"),
            Err(e) => error!("Failed to close PostgreSQL connection: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
