//! Service layer.
//!
//! Services hold the request rules on top of the repositories: required field checks,
//! existence checks, duplicate detection and the transactional delete of catalog records.
//! They return DTOs ready to be serialized and [`Error`](crate::server::error::Error)s that
//! map onto HTTP status codes.

pub mod catalog;
pub mod favorite;
pub mod user;
