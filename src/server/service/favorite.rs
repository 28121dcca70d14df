//! Favorite rules: user checks, duplicate detection and removal.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::{api::MessageDto, favorite::FavoriteDto},
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{api::ApiError, Error},
        model::{catalog::CatalogLabel, favorite::FavoriteTarget},
    },
};

/// Error returned when a user has no favorite for the requested target
pub fn favorite_not_found() -> ApiError {
    ApiError::NotFound("Favorite not found".to_string())
}

/// Service linking users to their favorite people, planets and vehicles.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the favorites of a user ordered by ID.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    /// Adds a favorite for a user.
    ///
    /// The target record is not required to exist. Duplicates are detected by the unique
    /// index on `(user_id, target_kind, target_id)`, so concurrent requests for the same pair
    /// cannot both succeed.
    ///
    /// # Arguments
    /// - `user_id` - User ID from the request body, `None` when absent
    /// - `target` - Person, planet or vehicle to add as favorite
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite
    /// - `Err(Error::ApiError(ApiError::Validation))` - User ID absent
    /// - `Err(Error::ApiError(ApiError::NotFound))` - User does not exist
    /// - `Err(Error::ApiError(ApiError::Conflict))` - Favorite already exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(
        &self,
        user_id: Option<i32>,
        target: FavoriteTarget,
    ) -> Result<FavoriteDto, Error> {
        let Some(user_id) = user_id else {
            return Err(ApiError::Validation("User ID is required".to_string()).into());
        };

        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(ApiError::NotFound("User not found".to_string()).into());
        }

        match FavoriteRepository::new(self.db).create(user_id, target).await {
            Ok(favorite) => Ok(favorite.into()),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ApiError::Conflict("Favorite already exists".to_string()).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a favorite of a user.
    ///
    /// A missing user ID matches no favorite and is reported as not found.
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - Favorite removed
    /// - `Err(Error::ApiError(ApiError::NotFound))` - No such favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove(
        &self,
        user_id: Option<i32>,
        target: FavoriteTarget,
    ) -> Result<MessageDto, Error> {
        let Some(user_id) = user_id else {
            return Err(favorite_not_found().into());
        };

        let result = FavoriteRepository::new(self.db)
            .delete(user_id, target)
            .await?;
        if result.rows_affected == 0 {
            return Err(favorite_not_found().into());
        }

        Ok(MessageDto {
            message: format!("Favorite {} deleted", target.kind().favorite_label()),
        })
    }
}
