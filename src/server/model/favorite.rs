//! Favorite targets.

use entity::sea_orm_active_enums::CatalogKind;

use crate::{model::favorite::FavoriteDto, server::model::db::FavoriteModel};

/// The catalog record a favorite points at.
///
/// Stored as a `(target_kind, target_id)` pair next to the user ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    /// A row of the people table
    Person(i32),
    /// A row of the planets table
    Planet(i32),
    /// A row of the vehicles table
    Vehicle(i32),
}

impl FavoriteTarget {
    /// Rebuilds a target from its stored columns.
    pub fn from_parts(kind: CatalogKind, id: i32) -> Self {
        match kind {
            CatalogKind::People => Self::Person(id),
            CatalogKind::Planet => Self::Planet(id),
            CatalogKind::Vehicle => Self::Vehicle(id),
        }
    }

    /// Catalog table the target lives in.
    pub fn kind(&self) -> CatalogKind {
        match self {
            Self::Person(_) => CatalogKind::People,
            Self::Planet(_) => CatalogKind::Planet,
            Self::Vehicle(_) => CatalogKind::Vehicle,
        }
    }

    /// Primary key of the target within its table.
    pub fn id(&self) -> i32 {
        match self {
            Self::Person(id) | Self::Planet(id) | Self::Vehicle(id) => *id,
        }
    }
}

impl From<FavoriteModel> for FavoriteDto {
    fn from(model: FavoriteModel) -> Self {
        let mut dto = FavoriteDto {
            id: model.id,
            user_id: model.user_id,
            people_id: None,
            planets_id: None,
            vehicle_id: None,
        };

        match FavoriteTarget::from_parts(model.target_kind, model.target_id) {
            FavoriteTarget::Person(id) => dto.people_id = Some(id),
            FavoriteTarget::Planet(id) => dto.planets_id = Some(id),
            FavoriteTarget::Vehicle(id) => dto.vehicle_id = Some(id),
        }

        dto
    }
}
