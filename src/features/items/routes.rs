use std::sync::Arc;

use axum::{
    routing::{post, put},
    Router,
};

use crate::features::items::handlers;
use crate::features::items::services::ItemService;

/// Create routes for item management
///
/// Note: mounted behind the session middleware
pub fn routes(service: Arc<ItemService>) -> Router {
    Router::new()
        .route("/api/items", post(handlers::create_item))
        .route(
            "/api/items/{id}",
            put(handlers::update_item).delete(handlers::delete_item),
        )
        .with_state(service)
}
