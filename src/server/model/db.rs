//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the application so that
//! signatures don't need to spell out the generated `entity` crate paths.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique email address
/// - `password` - Password as provided at account creation
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for the people database model.
pub type PeopleModel = entity::people::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planets::Model;

/// Type alias for the vehicle database model.
pub type VehicleModel = entity::vehicles::Model;

/// Type alias for the favorite database model.
///
/// # Fields (from `entity::favorites::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `target_kind` - Which catalog table `target_id` refers to
/// - `target_id` - ID of the favorited person, planet or vehicle
pub type FavoriteModel = entity::favorites::Model;
