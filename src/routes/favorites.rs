use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extractors::{JsonBody, PathParam};
use crate::favorites::Favorites;
use crate::models::{Favorite, UserId};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub user_id: Option<UserId>,
    pub category: Option<String>,
    pub target_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct AddFavoriteResponse {
    pub message: String,
    pub favorite: Favorite,
}

/// Add a favorite for a user
///
/// 400 on missing fields or unsupported category, 404 when the user or the
/// target does not exist.
pub async fn add_favorite(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<AddFavoriteResponse>)> {
    let favorite = Favorites::new(state.db.clone())
        .add(
            payload.user_id,
            payload.category.as_deref(),
            payload.target_id,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddFavoriteResponse {
            message: "Favorite added successfully".to_string(),
            favorite,
        }),
    ))
}

pub async fn list_favorites(State(state): State<AppState>) -> Result<Json<Vec<Favorite>>> {
    Ok(Json(Favorites::new(state.db.clone()).list_all().await?))
}

/// Favorites of one user; an unknown user simply has none
pub async fn list_user_favorites(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<UserId>,
) -> Result<Json<Vec<Favorite>>> {
    Ok(Json(
        Favorites::new(state.db.clone())
            .list_for_user(user_id)
            .await?,
    ))
}
