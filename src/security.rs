use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::error::{AppError, Result};

/// Hash a plaintext password with Argon2id
///
/// Returns the PHC string (algorithm, parameters, salt and hash), which is
/// what gets stored in the `users.password` column. A fresh random salt is
/// generated per call, so hashing the same password twice yields two
/// different strings.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHash(e.to_string()))
}

/// Hash a password on the blocking pool
///
/// Argon2 is CPU and memory hard; running it inline would stall the runtime.
pub async fn hash_password_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}
