//! Catalog records shared by the people, planet and vehicle tables.

use entity::sea_orm_active_enums::CatalogKind;

use crate::{
    model::catalog::CatalogEntryDto,
    server::{
        error::api::ApiError,
        model::db::{PeopleModel, PlanetModel, VehicleModel},
    },
};

/// A row of any of the catalog tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Primary key within its table
    pub id: i32,
    /// Display name
    pub name: String,
}

impl From<PeopleModel> for CatalogEntry {
    fn from(model: PeopleModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<PlanetModel> for CatalogEntry {
    fn from(model: PlanetModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<VehicleModel> for CatalogEntry {
    fn from(model: VehicleModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<CatalogEntry> for CatalogEntryDto {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
        }
    }
}

/// Human readable names for each catalog table.
pub trait CatalogLabel {
    /// Capitalized singular name used in response messages, e.g. `Planet`
    fn entry_label(&self) -> &'static str;
    /// Lowercase singular name used in favorite messages, e.g. `planet`
    fn favorite_label(&self) -> &'static str;

    /// Error returned when no record of this kind has the requested ID
    fn not_found(&self) -> ApiError {
        ApiError::NotFound(format!("{} not found", self.entry_label()))
    }
}

impl CatalogLabel for CatalogKind {
    fn entry_label(&self) -> &'static str {
        match self {
            CatalogKind::People => "Person",
            CatalogKind::Planet => "Planet",
            CatalogKind::Vehicle => "Vehicle",
        }
    }

    fn favorite_label(&self) -> &'static str {
        match self {
            CatalogKind::People => "person",
            CatalogKind::Planet => "planet",
            CatalogKind::Vehicle => "vehicle",
        }
    }
}
