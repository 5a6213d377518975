use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::api::error::{ApiError, ErrorResponse};
use crate::domain::ValidationError;
use crate::infrastructure::AppState;
use crate::infrastructure::rate_limit::ClientQuota;
use crate::services::{ClassificationResult, classify};

/// Documented request shape; the handler validates raw JSON against it
#[derive(Debug, Deserialize, ToSchema)]
pub struct BfhlRequest {
    pub data: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BfhlResponse {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub operation_code: u8,
    pub message: String,
    pub timestamp: String,
}

/// Check the body shape and pull out the token list
pub fn validate_payload(body: &Value) -> Result<Vec<String>, ValidationError> {
    let object = body.as_object().ok_or(ValidationError::WrongType)?;

    match object.get("data") {
        None | Some(Value::Null) => Err(ValidationError::MissingField),
        Some(Value::Array(items)) if items.is_empty() => Err(ValidationError::EmptyArray),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or(ValidationError::WrongType)
            })
            .collect(),
        Some(_) => Err(ValidationError::WrongType),
    }
}

#[utoipa::path(
    post,
    path = "/bfhl",
    request_body = BfhlRequest,
    responses(
        (status = 200, description = "Tokens classified", body = BfhlResponse),
        (status = 400, description = "Invalid or empty data array", body = ErrorResponse),
        (status = 413, description = "Body exceeds the configured limit", body = ErrorResponse),
        (status = 429, description = "Client exceeded its request quota", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn process_data(
    State(state): State<AppState>,
    quota: ClientQuota,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BfhlResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            tracing::warn!(
                "Rejected body from {}: {}",
                quota.client,
                rejection.body_text()
            );
            ApiError::Validation(ValidationError::WrongType)
        }
    })?;

    let items = validate_payload(&body).inspect_err(|e| {
        tracing::warn!("Rejected body from {}: {}", quota.client, e);
    })?;

    let result = classify(&items).map_err(|e| {
        tracing::error!("Classification failed: {}", e);
        ApiError::Internal {
            details: state.config.is_development().then(|| e.to_string()),
        }
    })?;

    let user = &state.config.user;
    Ok(Json(BfhlResponse {
        is_success: true,
        user_id: user.user_id(),
        email: user.email.clone(),
        roll_number: user.roll_number.clone(),
        result,
    }))
}

#[utoipa::path(
    get,
    path = "/bfhl",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        operation_code: 1,
        message: "BFHL API is running".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
