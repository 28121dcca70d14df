//! Request extraction helpers shared by controllers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::error::api::ApiError;

/// `user_id` query parameter
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// ID of the user
    pub user_id: Option<String>,
}

impl UserIdQuery {
    /// Returns the user ID, failing when it is absent, empty or not an integer
    pub fn required(&self) -> Result<i32, ApiError> {
        let Some(user_id) = self.user_id.as_deref().filter(|id| !id.is_empty()) else {
            return Err(ApiError::Validation("User ID is required".to_string()));
        };

        user_id
            .parse::<i32>()
            .map_err(|_| ApiError::Validation("User ID must be an integer".to_string()))
    }

    /// Returns the user ID if present and valid, `None` otherwise
    pub fn optional(&self) -> Option<i32> {
        self.user_id.as_deref().and_then(|id| id.parse::<i32>().ok())
    }
}

/// Unwraps a JSON body, treating an absent or malformed body as having no fields
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Option<T> {
    match payload {
        Ok(Json(body)) => Some(body),
        Err(rejection) => {
            tracing::debug!("Ignoring unreadable request body: {}", rejection.body_text());

            None
        }
    }
}

/// Unwraps a numeric path ID
///
/// An ID that is not an `i32` cannot name any record, so it is reported as `not_found`
/// instead of axum's plain-text rejection.
pub fn path_id(
    path: Result<Path<i32>, PathRejection>,
    not_found: ApiError,
) -> Result<i32, ApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!("Unparsable path ID: {}", rejection.body_text());

            Err(not_found)
        }
    }
}
