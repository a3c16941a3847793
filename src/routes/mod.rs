use axum::{Router, http::Uri, routing::get};

use crate::{error::AppError, middleware::cors::cors_layer, state::AppState};

pub mod cart;
pub mod chat;
pub mod doc;
pub mod health;
pub mod messages;
pub mod params;
pub mod products;
pub mod sessions;
pub mod wishlist;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/sessions", sessions::router())
        .nest("/messages", messages::router())
        .nest("/products", products::router())
        .nest("/wishlist", wishlist::router())
        .nest("/cart", cart::router())
        .nest("/chat", chat::router())
}

/// Full application: service routes, API, docs and CORS, bound to `state`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/test", get(health::test_database))
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(cors_layer())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route matched");
    AppError::NotFound
}
