//! Favorite queries, keyed by user and target.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{db::FavoriteModel, favorite::FavoriteTarget};

/// Repository for the favorites table.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the favorites of a user ordered by ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await
    }

    /// Inserts a favorite
    ///
    /// Fails with a unique constraint violation when the user already has the target as a
    /// favorite, see [`DbErr::sql_err`].
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorites::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            target_kind: ActiveValue::Set(target.kind()),
            target_id: ActiveValue::Set(target.id()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Deletes the favorite linking the user to the target
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32, target: FavoriteTarget) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_many()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .filter(entity::favorites::Column::TargetKind.eq(target.kind()))
            .filter(entity::favorites::Column::TargetId.eq(target.id()))
            .exec(self.db)
            .await
    }

    /// Deletes every favorite pointing at the target, across all users
    pub async fn delete_by_target(&self, target: FavoriteTarget) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_many()
            .filter(entity::favorites::Column::TargetKind.eq(target.kind()))
            .filter(entity::favorites::Column::TargetId.eq(target.id()))
            .exec(self.db)
            .await
    }
}
