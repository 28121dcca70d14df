//! Queries over the people, planets and vehicles tables.

use entity::sea_orm_active_enums::CatalogKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::server::model::catalog::CatalogEntry;

/// Repository over the people, planets and vehicles tables.
///
/// The three tables share the same shape, the `kind` chosen at construction selects which
/// one every method operates on.
pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
    kind: CatalogKind,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    /// Creates a new instance of [`CatalogRepository`] for the table of `kind`
    pub fn new(db: &'a C, kind: CatalogKind) -> Self {
        Self { db, kind }
    }

    /// Returns every record of the table ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CatalogEntry>, DbErr> {
        let entries = match self.kind {
            CatalogKind::People => into_entries(
                entity::prelude::People::find()
                    .order_by_asc(entity::people::Column::Id)
                    .all(self.db)
                    .await?,
            ),
            CatalogKind::Planet => into_entries(
                entity::prelude::Planets::find()
                    .order_by_asc(entity::planets::Column::Id)
                    .all(self.db)
                    .await?,
            ),
            CatalogKind::Vehicle => into_entries(
                entity::prelude::Vehicles::find()
                    .order_by_asc(entity::vehicles::Column::Id)
                    .all(self.db)
                    .await?,
            ),
        };

        Ok(entries)
    }

    /// Returns the record with the given ID, `None` if there is none
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CatalogEntry>, DbErr> {
        let entry = match self.kind {
            CatalogKind::People => entity::prelude::People::find_by_id(id)
                .one(self.db)
                .await?
                .map(CatalogEntry::from),
            CatalogKind::Planet => entity::prelude::Planets::find_by_id(id)
                .one(self.db)
                .await?
                .map(CatalogEntry::from),
            CatalogKind::Vehicle => entity::prelude::Vehicles::find_by_id(id)
                .one(self.db)
                .await?
                .map(CatalogEntry::from),
        };

        Ok(entry)
    }

    /// Inserts a new record, returning it with its assigned ID
    pub async fn create(&self, name: String) -> Result<CatalogEntry, DbErr> {
        let entry: CatalogEntry = match self.kind {
            CatalogKind::People => entity::people::ActiveModel {
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(self.db)
            .await?
            .into(),
            CatalogKind::Planet => entity::planets::ActiveModel {
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(self.db)
            .await?
            .into(),
            CatalogKind::Vehicle => entity::vehicles::ActiveModel {
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(self.db)
            .await?
            .into(),
        };

        Ok(entry)
    }

    /// Deletes a record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        match self.kind {
            CatalogKind::People => entity::prelude::People::delete_by_id(id).exec(self.db).await,
            CatalogKind::Planet => entity::prelude::Planets::delete_by_id(id).exec(self.db).await,
            CatalogKind::Vehicle => {
                entity::prelude::Vehicles::delete_by_id(id)
                    .exec(self.db)
                    .await
            }
        }
    }
}

fn into_entries<M: Into<CatalogEntry>>(models: Vec<M>) -> Vec<CatalogEntry> {
    models.into_iter().map(Into::into).collect()
}
