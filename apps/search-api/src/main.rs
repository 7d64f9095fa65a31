use axum_helpers::{cors_layer, create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{client_from_config, database_from_config, verify_with_retry};
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        service = %config.app.name,
        version = config.app.version,
        url = %config.mongodb.redacted_url(),
        "Starting search service"
    );

    let mongo_client = client_from_config(&config.mongodb).await?;

    // Keep serving when MongoDB is down; searches fail until it recovers
    match verify_with_retry(&mongo_client, None).await {
        Ok(()) => info!("Connected to MongoDB"),
        Err(e) => warn!(error = %e, "MongoDB unreachable at startup, continuing without it"),
    }

    let db = database_from_config(&mongo_client, &config.mongodb);
    info!(database = db.name(), collection = %config.collection, "Using item collection");

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let cors = cors_layer(&state.config.cors_allowed_origins)?;
    let router = create_router::<openapi::ApiDoc>(api::routes(&state), cors);

    let client = state.mongo_client.clone();
    create_production_app(router, &state.config.server, async move {
        info!("Shutting down: closing MongoDB connections");
        client.shutdown().await;
        info!("MongoDB connections closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Search service shutdown complete");
    Ok(())
}
