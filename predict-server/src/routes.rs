//! Router

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

use crate::handlers;
use crate::AppState;

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/v1/model", get(handlers::model::info))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .route("/api/v1/risk", post(handlers::predict::risk))
        .route("/api/v1/recommendations/:label", get(handlers::recommendations::get))
        .route("/api/v1/dataset/summary", get(handlers::dataset::summary));

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
