//! Data transfer objects shared by the HTTP API and its consumers.

pub mod api;
pub mod catalog;
pub mod favorite;
pub mod user;
