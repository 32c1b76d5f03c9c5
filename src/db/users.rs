use super::Db;
use crate::models::{NewUser, User, UserId};

pub async fn insert(db: &Db, user: &NewUser) -> Result<UserId, sqlx::Error> {
    sqlx::query_scalar::<_, UserId>(
        "INSERT INTO users (email, password, is_active, name, surname, subscribed_at)
         VALUES (?, ?, 1, ?, ?, ?)
         RETURNING id",
    )
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.name)
    .bind(&user.surname)
    .bind(user.subscribed_at)
    .fetch_one(db)
    .await
}

pub async fn list(db: &Db) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn find(db: &Db, id: UserId) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Delete a user; favorites go with it through the foreign key cascade.
/// Returns false when no such user existed.
pub async fn delete(db: &Db, id: UserId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
