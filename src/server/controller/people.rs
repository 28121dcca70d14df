//! People catalog endpoints.

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

/// OpenAPI tag for the people catalog endpoints
pub static PEOPLE_TAG: &str = "people";

/// Get all people
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving people", body = Vec<CatalogEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = CatalogService::new(&state.db, CatalogKind::People).list().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Get a person by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "ID of the person")),
    responses(
        (status = 200, description = "Success when retrieving the person", body = CatalogEntryDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = path_id(path, CatalogKind::People.not_found())?;

    let person = CatalogService::new(&state.db, CatalogKind::People).get(id).await?;

    Ok((StatusCode::OK, Json(person)))
}

/// Create a person
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreateCatalogEntryDto,
    responses(
        (status = 201, description = "Person created", body = CatalogEntryDto),
        (status = 400, description = "Missing 'name' field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreateCatalogEntryDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let name = json_body(payload).and_then(|body| body.name);

    let person = CatalogService::new(&state.db, CatalogKind::People)
        .create(name)
        .await?;

    Ok((StatusCode::CREATED, Json(person)))
}

/// Delete a person along with every favorite pointing at it
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "ID of the person")),
    responses(
        (status = 200, description = "Person deleted", body = MessageDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = path_id(path, CatalogKind::People.not_found())?;

    let message = CatalogService::new(&state.db, CatalogKind::People)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(message)))
}
