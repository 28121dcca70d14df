//! Server application models and type definitions.
//!
//! This module contains the application state handed to every request handler, type aliases
//! for the SeaORM entity models, and the domain types that sit between database rows and the
//! API's data transfer objects.

pub mod app;
pub mod catalog;
pub mod db;
pub mod favorite;
