use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Recognition API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/services": { "get": { "summary": "List recognition services in selector order" } },
            "/api/v1/recognize": {
                "post": {
                    "summary": "Recognize an uploaded image",
                    "description": "multipart/form-data with an `image` file part (jpg, jpeg or png) and a `service` part (Celebrity, Text or Facial Analysis)"
                }
            },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}
