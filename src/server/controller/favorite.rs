//! Endpoints adding and removing favorite people, planets and vehicles.
//!
//! Each target kind has its own path; the add and remove handlers share one implementation.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::CatalogKind;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{CreateFavoriteDto, FavoriteDto},
    },
    server::{
        controller::util::{json_body, path_id, UserIdQuery},
        error::Error,
        model::{app::AppState, catalog::CatalogLabel, favorite::FavoriteTarget},
        service::favorite::{favorite_not_found, FavoriteService},
    },
};

/// OpenAPI tag for the favorite endpoints
pub static FAVORITE_TAG: &str = "favorites";

async fn add_favorite(
    state: &AppState,
    target: FavoriteTarget,
    payload: Result<Json<CreateFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = json_body(payload).and_then(|body| body.user_id);

    let favorite = FavoriteService::new(&state.db).add(user_id, target).await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

async fn remove_favorite(
    state: &AppState,
    target: FavoriteTarget,
    params: &UserIdQuery,
) -> Result<impl IntoResponse, Error> {
    let message = FavoriteService::new(&state.db)
        .remove(params.optional(), target)
        .await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "User ID is required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let planet_id = path_id(path, CatalogKind::Planet.not_found())?;

    add_favorite(&state, FavoriteTarget::Planet(planet_id), payload).await
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "ID of the planet"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let planet_id = path_id(path, favorite_not_found())?;

    remove_favorite(&state, FavoriteTarget::Planet(planet_id), &params).await
}

/// Add a person to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the person")),
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "User ID is required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let person_id = path_id(path, CatalogKind::People.not_found())?;

    add_favorite(&state, FavoriteTarget::Person(person_id), payload).await
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "ID of the person"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_person(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let person_id = path_id(path, favorite_not_found())?;

    remove_favorite(&state, FavoriteTarget::Person(person_id), &params).await
}

/// Add a vehicle to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/vehicle/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the vehicle")),
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "User ID is required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_id = path_id(path, CatalogKind::Vehicle.not_found())?;

    add_favorite(&state, FavoriteTarget::Vehicle(vehicle_id), payload).await
}

/// Remove a vehicle from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/vehicle/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "ID of the vehicle"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_id = path_id(path, favorite_not_found())?;

    remove_favorite(&state, FavoriteTarget::Vehicle(vehicle_id), &params).await
}
