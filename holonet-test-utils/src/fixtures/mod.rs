//! Test fixture modules for database record creation.
//!
//! - `user` - User accounts
//! - `catalog` - People, planets and vehicles
//! - `favorite` - Favorites linking users to catalog records

pub mod catalog;
pub mod favorite;
pub mod user;
