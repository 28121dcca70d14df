//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use tower::{Layer, ServiceBuilder};
use tower_http::{cors::CorsLayer, normalize_path::NormalizePathLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /users` - List users
/// - `GET /users/favorites?user_id=` - List the favorites of a user
/// - `GET|POST /people`, `GET|DELETE /people/{id}` - People catalog
/// - `GET|POST /planets`, `GET|DELETE /planets/{id}` - Planets catalog
/// - `GET|POST /vehicles`, `GET|DELETE /vehicles/{id}` - Vehicles catalog
/// - `POST|DELETE /favorite/{planet|people|vehicle}/{id}` - Add or remove a favorite
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`. Requests are traced and CORS is permissive.
///
/// API paths accept a trailing slash (`/people/` is `/people`). Swagger UI is routed ahead
/// of the slash trimming since it redirects `/api/docs` to `/api/docs/`.
///
/// # Returns
/// An Axum `Router` configured with all routes and middleware.
///
/// # Example
/// ```ignore
/// let router = routes(AppState { db });
/// ```
pub fn routes(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::people::PEOPLE_TAG, description = "People catalog API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planets catalog API routes"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicles catalog API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorites API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::people::get_all_people,
            controller::people::create_person
        ))
        .routes(routes!(
            controller::people::get_person,
            controller::people::delete_person
        ))
        .routes(routes!(
            controller::planet::get_all_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::vehicle::get_all_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::delete_favorite_person
        ))
        .routes(routes!(
            controller::favorite::add_favorite_vehicle,
            controller::favorite::delete_favorite_vehicle
        ))
        .split_for_parts();

    let api_routes = NormalizePathLayer::trim_trailing_slash().layer(routes.with_state(state));

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback_service(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
