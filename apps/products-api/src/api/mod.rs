//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Callable operations, mounted under `/api` by `create_router`
pub fn routes(state: &AppState) -> Router {
    products::router(state)
}
