//! Error types for the Holonet server application.
//!
//! This module provides the error handling for the server. Request-level failures (missing
//! fields, unknown records, duplicate favorites) are expressed by [`ApiError`] and map onto
//! 4xx responses, everything else is logged and reported as a generic 500. Errors are defined
//! with `thiserror`, and the ones a request can produce implement `IntoResponse`.

pub mod api;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::api::ApiError};

/// Main error type for the Holonet server application.
///
/// Aggregates the request errors and external library errors into a single type. `#[from]`
/// conversions allow propagation with the `?` operator from repositories, services and
/// start-up code alike. Configuration is read before any of these run, see
/// [`ConfigError`](config::ConfigError).
#[derive(Error, Debug)]
pub enum Error {
    /// Request error (validation, missing record, conflict).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Required field missing
/// - 404 Not Found - Unknown record or favorite
/// - 409 Conflict - Favorite already exists
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApiError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
