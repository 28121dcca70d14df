//! Planets catalog endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::CatalogKind;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        catalog::{CatalogEntryDto, CreateCatalogEntryDto},
    },
    server::{
        controller::util::{json_body, path_id},
        error::Error,
        model::{app::AppState, catalog::CatalogLabel},
        service::catalog::CatalogService,
    },
};

/// OpenAPI tag for the planets catalog endpoints
pub static PLANET_TAG: &str = "planets";

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<CatalogEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = CatalogService::new(&state.db, CatalogKind::Planet).list().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = CatalogEntryDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = path_id(path, CatalogKind::Planet.not_found())?;

    let planet = CatalogService::new(&state.db, CatalogKind::Planet).get(id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreateCatalogEntryDto,
    responses(
        (status = 201, description = "Planet created", body = CatalogEntryDto),
        (status = 400, description = "Missing 'name' field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreateCatalogEntryDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let name = json_body(payload).and_then(|body| body.name);

    let planet = CatalogService::new(&state.db, CatalogKind::Planet)
        .create(name)
        .await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

/// Delete a planet along with every favorite pointing at it
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = path_id(path, CatalogKind::Planet.not_found())?;

    let message = CatalogService::new(&state.db, CatalogKind::Planet)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(message)))
}
