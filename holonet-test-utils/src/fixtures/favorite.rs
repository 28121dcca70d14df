use entity::sea_orm_active_enums::CatalogKind;
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        kind: CatalogKind,
        target_id: i32,
    ) -> Result<entity::favorites::Model, TestError> {
        Ok(
            entity::prelude::Favorites::insert(entity::favorites::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                target_kind: ActiveValue::Set(kind),
                target_id: ActiveValue::Set(target_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Number of favorite rows currently stored
    pub async fn count(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Favorites::find()
            .count(&self.setup.db)
            .await?)
    }
}
