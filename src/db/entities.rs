use super::Db;
use crate::models::Entity;

pub async fn list<T: Entity>(db: &Db) -> Result<Vec<T>, sqlx::Error> {
    let sql = format!("SELECT * FROM {} ORDER BY id", T::TABLE);
    sqlx::query_as::<_, T>(&sql).fetch_all(db).await
}

pub async fn find<T: Entity>(db: &Db, id: i64) -> Result<Option<T>, sqlx::Error> {
    let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
    sqlx::query_as::<_, T>(&sql).bind(id).fetch_optional(db).await
}
