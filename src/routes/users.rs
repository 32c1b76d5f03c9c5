use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_INCOMPLETE_USER, ERR_PASSWORD_REQUIRED, ERR_USER_NOT_FOUND};
use crate::db;
use crate::error::{AppError, Result};
use crate::extractors::{JsonBody, PathParam};
use crate::models::{NewUser, User, UserId};
use crate::security::hash_password_blocking;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub id: UserId,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub success: bool,
    pub message: String,
}

/// Sign up a new user
///
/// `email`, `password` and `name` are required, `surname` defaults to an
/// empty string. The password is hashed with Argon2 before it touches the
/// database.
///
/// Returns 409 Conflict if the email is already registered.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    let (Some(email), Some(password), Some(name)) =
        (payload.email, payload.password, payload.name)
    else {
        return Err(AppError::InvalidInput(ERR_INCOMPLETE_USER.to_string()));
    };

    if password.is_empty() {
        return Err(AppError::InvalidInput(ERR_PASSWORD_REQUIRED.to_string()));
    }

    let password_hash = hash_password_blocking(password).await?;

    let new_user = NewUser {
        email,
        password_hash,
        name,
        surname: payload.surname.unwrap_or_default(),
        subscribed_at: Utc::now(),
    };

    let id = db::users::insert(&state.db, &new_user)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict(_) => {
                tracing::info!("Signup rejected, email already registered");
                AppError::Conflict("A user with this email already exists".to_string())
            }
            other => other,
        })?;

    tracing::info!("New user registered: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            id,
            message: "User created successfully".to_string(),
        }),
    ))
}

/// List all users (password hashes are never serialized)
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(db::users::list(&state.db).await?))
}

pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<UserId>,
) -> Result<Json<User>> {
    db::users::find(&state.db, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(ERR_USER_NOT_FOUND))
}

/// Delete a user and, through the cascade, all of their favorites
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<UserId>,
) -> Result<Json<DeleteUserResponse>> {
    if !db::users::delete(&state.db, id).await? {
        tracing::warn!("Delete attempt for non-existent user {}", id);
        return Err(AppError::NotFound(ERR_USER_NOT_FOUND));
    }

    tracing::info!("User {} and their favorites deleted", id);

    Ok(Json(DeleteUserResponse {
        success: true,
        message: "User and all associated favorites deleted".to_string(),
    }))
}
