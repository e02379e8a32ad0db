use super::{
    handlers::{docs, health, recognize},
    middleware::logging::logging_middleware,
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Room for multipart boundaries and the `service` field on top of the image.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_image_bytes + MULTIPART_OVERHEAD_BYTES;

    let recognize_routes = Router::new()
        .route("/api/v1/recognize", post(recognize::recognize_image))
        .layer(DefaultBodyLimit::max(body_limit))
        .route_layer(middleware::from_fn(logging_middleware));

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Recognition
        .route("/api/v1/services", get(recognize::list_services))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        .merge(recognize_routes)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
