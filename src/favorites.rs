use crate::constants::{ERR_INCOMPLETE_FAVORITE, ERR_PLANET_NOT_FOUND, ERR_USER_NOT_FOUND};
use crate::db::{self, Db};
use crate::error::{AppError, Result};
use crate::models::{Favorite, FavoriteTarget, Planet, UserId};

/// Records and lists user favorites
pub struct Favorites {
    db: Db,
}

impl Favorites {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Validate and store a favorite
    ///
    /// Checks run in order: all inputs present, user exists, category
    /// supported, target exists. Nothing is written unless all pass.
    /// Duplicate favorites are allowed.
    pub async fn add(
        &self,
        user_id: Option<UserId>,
        category: Option<&str>,
        target_id: Option<i64>,
    ) -> Result<Favorite> {
        let (Some(user_id), Some(category), Some(target_id)) = (user_id, category, target_id)
        else {
            return Err(AppError::InvalidInput(ERR_INCOMPLETE_FAVORITE.to_string()));
        };

        if db::users::find(&self.db, user_id).await?.is_none() {
            tracing::warn!("Favorite requested for non-existent user {}", user_id);
            return Err(AppError::NotFound(ERR_USER_NOT_FOUND));
        }

        let target = FavoriteTarget::parse(category, target_id)?;

        match target {
            FavoriteTarget::Planet(planet_id) => {
                if db::entities::find::<Planet>(&self.db, planet_id.0)
                    .await?
                    .is_none()
                {
                    return Err(AppError::NotFound(ERR_PLANET_NOT_FOUND));
                }
            }
        }

        let favorite = db::favorites::insert(&self.db, user_id, target).await?;

        tracing::info!(
            "User {} favorited {} {}",
            user_id,
            target.category(),
            target.target_id()
        );

        Ok(favorite)
    }

    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Favorite>> {
        Ok(db::favorites::list_for_user(&self.db, user_id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Favorite>> {
        Ok(db::favorites::list(&self.db).await?)
    }
}
