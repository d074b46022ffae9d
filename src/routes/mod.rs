// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use chat::{chat_handler, method_not_allowed};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// `max_body_bytes` bounds the buffered chat request body.
pub fn create_router(max_body_bytes: usize) -> Router<SharedState> {
    Router::new()
        .route(
            "/api/chat",
            post(chat_handler)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

/// Router with state attached and the optional CORS layer on top.
pub fn build_app(state: SharedState) -> Router {
    let cors_enabled = state.config.cors_enabled;
    let app = create_router(state.config.max_body_bytes).with_state(state);

    if cors_enabled {
        app.layer(CorsLayer::very_permissive())
    } else {
        app
    }
}
