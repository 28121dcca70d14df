use entity::sea_orm_active_enums::CatalogKind;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_person(&self, name: &str) -> Result<entity::people::Model, TestError> {
        Ok(entity::prelude::People::insert(entity::people::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_planet(&self, name: &str) -> Result<entity::planets::Model, TestError> {
        Ok(entity::prelude::Planets::insert(entity::planets::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_vehicle(&self, name: &str) -> Result<entity::vehicles::Model, TestError> {
        Ok(entity::prelude::Vehicles::insert(entity::vehicles::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert into the table matching `kind`, returning the new record ID
    pub async fn insert_entry(&self, kind: CatalogKind, name: &str) -> Result<i32, TestError> {
        let id = match kind {
            CatalogKind::People => self.insert_person(name).await?.id,
            CatalogKind::Planet => self.insert_planet(name).await?.id,
            CatalogKind::Vehicle => self.insert_vehicle(name).await?.id,
        };

        Ok(id)
    }
}
