//! Test utilities for Holonet.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the schema and fixtures, then
//! `build()` returns a [`TestContext`] backed by an in-memory SQLite database.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
    pub use entity::sea_orm_active_enums::CatalogKind;
}
