//! API description endpoint.

use axum::Json;

/// `GET /api-docs/openapi.json`
pub async fn openapi() -> Json<serde_json::Value> {
    Json(crate::openapi::document())
}
