//! Health check endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::{health_router, run_health_checks, HealthCheckFuture};
use serde_json::Value;

use crate::state::{AppState, StoreHandle};

/// `/ready` reports `database: connected` once MongoDB answers a ping; the
/// in-memory store is always ready.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match &state.store {
        StoreHandle::Mongo { client, .. } => {
            let database: HealthCheckFuture<'_> = Box::pin(async move {
                database::mongodb::ping(client)
                    .await
                    .map_err(|e| e.to_string())
            });
            run_health_checks(vec![("database", database)]).await
        }
        StoreHandle::Memory(_) => run_health_checks(Vec::new()).await,
    }
}

/// `/health` and `/ready`
pub fn router(state: AppState) -> Router {
    let app = state.config.app;
    let region = state.config.region.clone();

    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(health_router(app, region))
}
