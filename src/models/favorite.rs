use serde::Serialize;
use sqlx::{sqlite::SqliteRow, FromRow, Row};

use super::{FavoriteId, PlanetId, UserId};
use crate::constants::CATEGORY_PLANET;
use crate::error::{AppError, Result};

/// What a favorite points at
///
/// Stored as a `(category, target_id)` pair. Supporting another kind of
/// favorite means adding a variant here, plus a lookup in
/// [`crate::favorites::Favorites::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "category", content = "target_id", rename_all = "lowercase")]
pub enum FavoriteTarget {
    Planet(PlanetId),
}

impl FavoriteTarget {
    /// Category tag written to the `category` column
    pub fn category(&self) -> &'static str {
        match self {
            FavoriteTarget::Planet(_) => CATEGORY_PLANET,
        }
    }

    /// Raw id written to the `target_id` column
    pub fn target_id(&self) -> i64 {
        match self {
            FavoriteTarget::Planet(id) => id.0,
        }
    }

    fn from_parts(category: &str, target_id: i64) -> Option<Self> {
        match category {
            CATEGORY_PLANET => Some(FavoriteTarget::Planet(PlanetId(target_id))),
            _ => None,
        }
    }

    /// Build a target from request input
    ///
    /// Unknown categories are a validation failure, not a lookup miss.
    pub fn parse(category: &str, target_id: i64) -> Result<Self> {
        Self::from_parts(category, target_id)
            .ok_or_else(|| AppError::UnsupportedFavoriteType(category.to_string()))
    }
}

/// Favorite row: a user's preference for one target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub target: FavoriteTarget,
}

impl<'r> FromRow<'r, SqliteRow> for Favorite {
    fn from_row(row: &'r SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        let category: String = row.try_get("category")?;
        let target_id: i64 = row.try_get("target_id")?;

        let target = FavoriteTarget::from_parts(&category, target_id).ok_or_else(|| {
            sqlx::Error::ColumnDecode {
                index: "category".to_string(),
                source: format!("unknown favorite category: {category}").into(),
            }
        })?;

        Ok(Favorite {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_planet() {
        let target = FavoriteTarget::parse("planet", 3).unwrap();

        assert_eq!(target, FavoriteTarget::Planet(PlanetId(3)));
        assert_eq!(target.category(), "planet");
        assert_eq!(target.target_id(), 3);
    }

    #[test]
    fn test_parse_unsupported_category() {
        for category in ["vehiculo", "vehicle", "character", "Planet", ""] {
            assert!(
                matches!(
                    FavoriteTarget::parse(category, 1),
                    Err(AppError::UnsupportedFavoriteType(ref c)) if c == category
                ),
                "category {category:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_favorite_serializes_flat() {
        let favorite = Favorite {
            id: FavoriteId(7),
            user_id: UserId(2),
            target: FavoriteTarget::Planet(PlanetId(3)),
        };

        let value = serde_json::to_value(&favorite).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "user_id": 2,
                "category": "planet",
                "target_id": 3
            })
        );
    }
}
