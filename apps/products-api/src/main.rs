//! Products API - remote-callable product operations over HTTP

use axum::Router;
use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, StoreHandle};

/// Full application router: callable operations under `/api`, Swagger UI,
/// `/health` and `/ready`
fn build_app(state: &AppState) -> eyre::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;
    Ok(router.merge(api::health::router(state.clone())))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        region = %config.region.as_str(),
        store = %config.store,
        locale = %config.locale,
        "Starting Products API"
    );

    let state = AppState::connect(config).await?;
    let app = build_app(&state)?;

    info!("Starting Products API on port {}", state.config.server.port);

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, async move {
        if let StoreHandle::Mongo { client, .. } = state.store {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
            info!("MongoDB connection closed");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
