//! HTTP controller endpoints for the Holonet web API.
//!
//! Axum handlers for the catalogs (people, planets, vehicles), users and favorites.
//! Controllers extract identifiers from the path, query and body, delegate to services and
//! return JSON responses. Every handler is annotated for utoipa's OpenAPI documentation.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
pub mod util;
pub mod vehicle;
