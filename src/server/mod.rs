//! Server application core modules.
//!
//! This module contains all server-side functionality for Holonet, including HTTP routing,
//! request handlers, services enforcing the catalog and favorite rules, and the repositories
//! that talk to the database through SeaORM.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
