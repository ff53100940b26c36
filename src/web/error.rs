use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Generic message for requests that fail a field rule
pub const INVALID_DATA: &str = "The given data was invalid.";

/// Errors returned by the scheduling endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error on {field}: {message}")]
    Validation { field: &'static str, message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Validation { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "message": INVALID_DATA,
                    "errors": { field: [message] },
                })),
            )
                .into_response(),
        }
    }
}
