//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and all operations are executed in order during the
//! final `build()` call: schema first, then users, catalog entries and favorites.

use entity::sea_orm_active_enums::CatalogKind;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Schema
    migrate: bool,
    tables: Vec<TableCreateStatement>,

    // Database fixtures to insert
    users: Vec<i32>, // user numbers, see `UserFixtures::insert_mock_user`
    catalog_entries: Vec<(CatalogKind, String)>,
    favorites: Vec<(i32, CatalogKind, i32)>, // (user_id, target_kind, target_id)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no schema or fixtures configured.
    pub fn new() -> Self {
        Self {
            migrate: false,
            tables: Vec::new(),
            users: Vec::new(),
            catalog_entries: Vec::new(),
            favorites: Vec::new(),
        }
    }

    /// Run all migrations against the test database.
    ///
    /// Produces the production schema, including the favorites uniqueness index
    /// and the user foreign key.
    pub fn with_migrations(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Useful to set up a partial schema.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(People)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock user, see [`UserFixtures::insert_mock_user`](crate::fixtures::user::UserFixtures::insert_mock_user).
    pub fn with_mock_user(mut self, number: i32) -> Self {
        self.users.push(number);
        self
    }

    /// Insert a person with the given name.
    pub fn with_person(mut self, name: &str) -> Self {
        self.catalog_entries
            .push((CatalogKind::People, name.to_string()));
        self
    }

    /// Insert a planet with the given name.
    pub fn with_planet(mut self, name: &str) -> Self {
        self.catalog_entries
            .push((CatalogKind::Planet, name.to_string()));
        self
    }

    /// Insert a vehicle with the given name.
    pub fn with_vehicle(mut self, name: &str) -> Self {
        self.catalog_entries
            .push((CatalogKind::Vehicle, name.to_string()));
        self
    }

    /// Insert a favorite linking a user to a catalog record.
    pub fn with_favorite(mut self, user_id: i32, kind: CatalogKind, target_id: i32) -> Self {
        self.favorites.push((user_id, kind, target_id));
        self
    }

    /// Build the test context, executing all queued operations.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create schema
        if self.migrate {
            setup.with_migrations().await?;
        }
        setup.with_tables(self.tables).await?;

        // 2. Insert database fixtures
        for number in self.users {
            setup.user().insert_mock_user(number).await?;
        }

        for (kind, name) in self.catalog_entries {
            setup.catalog().insert_entry(kind, &name).await?;
        }

        for (user_id, kind, target_id) in self.favorites {
            setup
                .favorite()
                .insert_favorite(user_id, kind, target_id)
                .await?;
        }

        Ok(setup)
    }
}
