use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A numeric path segment did not parse; the store is never queried.
    #[error("Invalid {0} ID")]
    InvalidId(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidId(entity) => (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse { message: format!("Invalid {} ID", entity) }),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse { message: message.to_string() }),
            )
                .into_response(),
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { error: err.to_string() }),
                )
                    .into_response()
            }
        }
    }
}
