//! Wires the items domain to the configured collection.

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};
use tracing::info;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let collection = &state.config.collection;
    info!(collection = %collection, "Serving items collection");

    let repository = MongoItemRepository::with_collection(&state.db, collection);
    handlers::router(ItemService::new(repository))
}
