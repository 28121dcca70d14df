use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CatalogKind {
    #[sea_orm(string_value = "people")]
    People,
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
}
