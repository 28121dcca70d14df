use serde::{Deserialize, Serialize};

/// A person, planet or vehicle record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatalogEntryDto {
    pub id: i32,
    pub name: String,
}

/// Request body for creating a person, planet or vehicle
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCatalogEntryDto {
    pub name: Option<String>,
}
