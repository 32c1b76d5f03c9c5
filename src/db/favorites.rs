use super::Db;
use crate::models::{Favorite, FavoriteTarget, UserId};

pub async fn insert(
    db: &Db,
    user_id: UserId,
    target: FavoriteTarget,
) -> Result<Favorite, sqlx::Error> {
    sqlx::query_as::<_, Favorite>(
        "INSERT INTO favorites (user_id, category, target_id)
         VALUES (?, ?, ?)
         RETURNING id, user_id, category, target_id",
    )
    .bind(user_id)
    .bind(target.category())
    .bind(target.target_id())
    .fetch_one(db)
    .await
}

pub async fn list(db: &Db) -> Result<Vec<Favorite>, sqlx::Error> {
    sqlx::query_as::<_, Favorite>("SELECT * FROM favorites ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn list_for_user(db: &Db, user_id: UserId) -> Result<Vec<Favorite>, sqlx::Error> {
    sqlx::query_as::<_, Favorite>("SELECT * FROM favorites WHERE user_id = ? ORDER BY id")
        .bind(user_id)
        .fetch_all(db)
        .await
}
