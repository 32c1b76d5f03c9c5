//! Star Wars API Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod extractors;
pub mod favorites;
pub mod models;
pub mod routes;
pub mod security;
pub mod seed;

pub use config::Config;
pub use db::{open_database, Db};
pub use error::{AppError, Result};
pub use seed::SeedDataset;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use models::{Character, Planet, Vehicle};
use routes::{
    add_favorite, create_user, delete_user, get_entity, get_user, health_check, index,
    list_entities, list_favorites, list_user_favorites, list_users, populate,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
    pub dataset: Arc<SeedDataset>,
}

impl AppState {
    /// Create a new AppState with the given database, configuration and seed dataset
    pub fn new(db: Db, config: Config, dataset: SeedDataset) -> Self {
        Self {
            db,
            config,
            dataset: Arc::new(dataset),
        }
    }
}

/// Build the application router with every endpoint mounted
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).delete(delete_user))
        .route("/populate", post(populate))
        .route("/characters", get(list_entities::<Character>))
        .route("/characters/:id", get(get_entity::<Character>))
        .route("/planets", get(list_entities::<Planet>))
        .route("/planets/:id", get(get_entity::<Planet>))
        .route("/vehicles", get(list_entities::<Vehicle>))
        .route("/vehicles/:id", get(get_entity::<Vehicle>))
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/:user_id", get(list_user_favorites))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
