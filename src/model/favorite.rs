use serde::{Deserialize, Serialize};

/// A user's favorite, exactly one of the target ID fields is set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub people_id: Option<i32>,
    pub planets_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}

/// Request body for adding a favorite
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFavoriteDto {
    pub user_id: Option<i32>,
}
