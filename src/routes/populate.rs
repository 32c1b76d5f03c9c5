use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::error::Result;
use crate::seed::{SeedSummary, Seeder};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PopulateResponse {
    pub message: String,
    pub inserted: SeedSummary,
}

/// Load the reference dataset
///
/// Returns 409 Conflict when the database was already populated.
pub async fn populate(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<PopulateResponse>)> {
    let seeder = Seeder::new(state.db.clone(), state.dataset.clone());
    let inserted = seeder.populate().await?;

    Ok((
        StatusCode::CREATED,
        Json(PopulateResponse {
            message: "Database populated successfully".to_string(),
            inserted,
        }),
    ))
}
