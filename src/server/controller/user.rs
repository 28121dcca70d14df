//! User endpoints, including the favorites of a user.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, favorite::FavoriteDto, user::UserDto},
    server::{
        controller::util::UserIdQuery,
        error::Error,
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

/// OpenAPI tag for the user endpoints
pub static USER_TAG: &str = "users";

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get the favorites of a user
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Success when retrieving user favorites", body = Vec<FavoriteDto>),
        (status = 400, description = "User ID missing or invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let user_id = params.required()?;

    let favorites = FavoriteService::new(&state.db)
        .list_for_user(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}
