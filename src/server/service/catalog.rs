//! Catalog rules: name validation, not-found mapping and the transactional delete.

use entity::sea_orm_active_enums::CatalogKind;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{api::MessageDto, catalog::CatalogEntryDto},
    server::{
        data::{catalog::CatalogRepository, favorite::FavoriteRepository},
        error::{api::ApiError, Error},
        model::{catalog::CatalogLabel, favorite::FavoriteTarget},
    },
};

/// Service for the people, planets and vehicles catalogs.
///
/// One instance operates on the table selected by its [`CatalogKind`].
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
    kind: CatalogKind,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection, kind: CatalogKind) -> Self {
        Self { db, kind }
    }

    /// Lists every record of the catalog ordered by ID.
    pub async fn list(&self) -> Result<Vec<CatalogEntryDto>, Error> {
        let entries = CatalogRepository::new(self.db, self.kind).get_all().await?;

        Ok(entries.into_iter().map(CatalogEntryDto::from).collect())
    }

    /// Retrieves a single record.
    ///
    /// # Returns
    /// - `Ok(CatalogEntryDto)` - Record found
    /// - `Err(Error::ApiError(ApiError::NotFound))` - No record with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get(&self, id: i32) -> Result<CatalogEntryDto, Error> {
        let Some(entry) = CatalogRepository::new(self.db, self.kind)
            .get_by_id(id)
            .await?
        else {
            return Err(self.kind.not_found().into());
        };

        Ok(entry.into())
    }

    /// Creates a record from the provided name.
    ///
    /// # Arguments
    /// - `name` - Name from the request body, `None` when absent
    ///
    /// # Returns
    /// - `Ok(CatalogEntryDto)` - The created record with its assigned ID
    /// - `Err(Error::ApiError(ApiError::Validation))` - Name absent or empty, nothing inserted
    /// - `Err(Error::DbErr)` - Database insert failed
    pub async fn create(&self, name: Option<String>) -> Result<CatalogEntryDto, Error> {
        let Some(name) = name.filter(|name| !name.trim().is_empty()) else {
            return Err(ApiError::Validation("Missing 'name' field".to_string()).into());
        };

        let entry = CatalogRepository::new(self.db, self.kind)
            .create(name)
            .await?;

        tracing::info!(
            id = %entry.id,
            "Created {} {}",
            self.kind.favorite_label(),
            entry.name
        );

        Ok(entry.into())
    }

    /// Deletes a record together with every favorite pointing at it.
    ///
    /// Both deletions run in one transaction, a missing record leaves the favorites untouched.
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - Record deleted
    /// - `Err(Error::ApiError(ApiError::NotFound))` - No record with this ID
    /// - `Err(Error::DbErr)` - Database operation failed, transaction rolled back
    pub async fn delete(&self, id: i32) -> Result<MessageDto, Error> {
        let txn = self.db.begin().await?;

        let result = CatalogRepository::new(&txn, self.kind).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(self.kind.not_found().into());
        }

        let favorites = FavoriteRepository::new(&txn)
            .delete_by_target(FavoriteTarget::from_parts(self.kind, id))
            .await?;

        txn.commit().await?;

        tracing::info!(
            id = %id,
            favorites_removed = %favorites.rows_affected,
            "Deleted {}",
            self.kind.favorite_label()
        );

        Ok(MessageDto {
            message: format!("{} with ID {} has been deleted", self.kind.entry_label(), id),
        })
    }
}
