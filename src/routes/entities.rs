use axum::{
    extract::State,
    Json,
};

use crate::db;
use crate::error::{AppError, Result};
use crate::extractors::PathParam;
use crate::models::Entity;
use crate::AppState;

/// List every row of one reference table
///
/// Mounted once per kind, e.g. `get(list_entities::<Planet>)`.
pub async fn list_entities<T: Entity>(State(state): State<AppState>) -> Result<Json<Vec<T>>> {
    Ok(Json(db::entities::list::<T>(&state.db).await?))
}

/// Fetch one reference row by id, 404 when absent
pub async fn get_entity<T: Entity>(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<T>> {
    db::entities::find::<T>(&state.db, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(T::NOT_FOUND))
}
