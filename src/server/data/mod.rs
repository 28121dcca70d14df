//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same code runs against a pooled connection or inside a
//! transaction opened by a service.

pub mod catalog;
pub mod favorite;
pub mod user;
