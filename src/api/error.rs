//! HTTP-facing error envelope

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ValidationError;

/// Body returned for every failed request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub is_success: bool,
    pub error: String,
    /// Diagnostic text, only filled in development
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    PayloadTooLarge,
    NotFound,
    Internal { details: Option<String> },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::Validation(e) => e.message(),
            ApiError::PayloadTooLarge => "Request entity too large",
            ApiError::NotFound => "Endpoint not found",
            ApiError::Internal { .. } => "Internal server error",
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            is_success: false,
            error: self.message().to_string(),
            details: match self {
                ApiError::Internal { details } => details,
                _ => None,
            },
        };
        (status, Json(body)).into_response()
    }
}
