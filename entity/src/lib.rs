pub mod prelude;

pub mod favorites;
pub mod people;
pub mod planets;
pub mod sea_orm_active_enums;
pub mod user;
pub mod vehicles;
