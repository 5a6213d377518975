use axum::Json;
use serde_json::{Value, json};

use crate::api::error::ApiError;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static API metadata")
    )
)]
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "BFHL API Server",
        "version": "1.0.0",
        "endpoints": {
            "post": "/bfhl - Process data array",
            "get": "/bfhl - Health check"
        }
    }))
}

/// Fallback for unknown paths and unsupported methods
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
