//! Request errors and their HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures scoped to a single request, each carrying the message returned to the client.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// A required field was absent from the request.
    #[error("{0}")]
    Validation(String),
    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The record to create already exists.
    #[error("{0}")]
    Conflict(String),
}

impl ApiError {
    /// HTTP status code returned for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::debug!(status = %status, "{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
