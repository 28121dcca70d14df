//! Holonet: a CRUD API for Star Wars people, planets, vehicles and user favorites.

pub mod model;
pub mod server;
