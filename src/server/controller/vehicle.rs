//! Vehicles catalog endpoints.

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

/// OpenAPI tag for the vehicles catalog endpoints
pub static VEHICLE_TAG: &str = "vehicles";

/// Get all vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving vehicles", body = Vec<CatalogEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = CatalogService::new(&state.db, CatalogKind::Vehicle).list().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Success when retrieving the vehicle", body = CatalogEntryDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = path_id(path, CatalogKind::Vehicle.not_found())?;

    let vehicle = CatalogService::new(&state.db, CatalogKind::Vehicle).get(id).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateCatalogEntryDto,
    responses(
        (status = 201, description = "Vehicle created", body = CatalogEntryDto),
        (status = 400, description = "Missing 'name' field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<CreateCatalogEntryDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let name = json_body(payload).and_then(|body| body.name);

    let vehicle = CatalogService::new(&state.db, CatalogKind::Vehicle)
        .create(name)
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// Delete a vehicle along with every favorite pointing at it
#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Vehicle deleted", body = MessageDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = path_id(path, CatalogKind::Vehicle.not_found())?;

    let message = CatalogService::new(&state.db, CatalogKind::Vehicle)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(message)))
}
