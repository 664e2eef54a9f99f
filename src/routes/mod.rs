// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{Router, routing::get};
use chat::chat_handler;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const LIVENESS_MESSAGE: &str = "Server is running. Use /chat?message=your-message to chat.";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(|| async { LIVENESS_MESSAGE }))
        .route("/chat", get(chat_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::very_permissive()),
        )
}
