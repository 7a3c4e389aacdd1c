//! Products API routes

use axum::Router;
use domain_products::{handlers, MongoProductStore, ProductService};

use crate::state::{AppState, StoreHandle};

/// Create products router over the configured store
pub fn router(state: &AppState) -> Router {
    let locale = state.config.locale;

    match &state.store {
        StoreHandle::Mongo { db, .. } => {
            let store = MongoProductStore::with_collection(db, &state.config.collection);
            handlers::router(ProductService::new(store).with_locale(locale))
        }
        StoreHandle::Memory(store) => {
            handlers::router(ProductService::new(store.clone()).with_locale(locale))
        }
    }
}
