use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::server::{
    controller::health::{health, not_found, ready, root, status},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/status", get(status))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
}
