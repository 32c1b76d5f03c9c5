pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::Character;
pub use favorite::{Favorite, FavoriteTarget};
pub use planet::Planet;
pub use user::{NewUser, User};
pub use vehicle::Vehicle;

use serde::Serialize;
use sqlx::{sqlite::SqliteRow, FromRow};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

record_id!(
    /// Primary key of a row in `users`
    UserId
);
record_id!(
    /// Primary key of a row in `characters`
    CharacterId
);
record_id!(
    /// Primary key of a row in `planets`
    PlanetId
);
record_id!(
    /// Primary key of a row in `vehicles`
    VehicleId
);
record_id!(
    /// Primary key of a row in `favorites`
    FavoriteId
);

/// A reference record loaded by seeding and exposed read-only
///
/// Implemented by [`Character`], [`Planet`] and [`Vehicle`] so the list and
/// get-by-id accessors can be written once.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Unpin + 'static {
    /// Table holding the rows
    const TABLE: &'static str;
    /// Message returned when a get-by-id misses
    const NOT_FOUND: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ERR_CHARACTER_NOT_FOUND, ERR_PLANET_NOT_FOUND, ERR_VEHICLE_NOT_FOUND};

    #[test]
    fn test_entity_tables_and_not_found_messages() {
        assert_eq!(Character::TABLE, "characters");
        assert_eq!(Character::NOT_FOUND, ERR_CHARACTER_NOT_FOUND);
        assert_eq!(Planet::TABLE, "planets");
        assert_eq!(Planet::NOT_FOUND, ERR_PLANET_NOT_FOUND);
        assert_eq!(Vehicle::TABLE, "vehicles");
        assert_eq!(Vehicle::NOT_FOUND, ERR_VEHICLE_NOT_FOUND);
    }
}
