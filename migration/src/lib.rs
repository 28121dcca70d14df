pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_people_table;
mod m20260301_000003_create_planets_table;
mod m20260301_000004_create_vehicles_table;
mod m20260301_000005_create_favorites_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_people_table::Migration),
            Box::new(m20260301_000003_create_planets_table::Migration),
            Box::new(m20260301_000004_create_vehicles_table::Migration),
            Box::new(m20260301_000005_create_favorites_table::Migration),
        ]
    }
}
