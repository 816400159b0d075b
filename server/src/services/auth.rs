//! Credential store service — register and login against the `users` table.
//!
//! TRADE-OFFS
//! ==========
//! Login reports the same `InvalidCredentials` error for an unknown username
//! and a wrong password so responses never leak which usernames exist.

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// bcrypt cost factor used for stored password hashes.
const HASH_COST: u32 = 10;

/// A registered user, as exposed on the wire. Never carries the hash.
#[derive(Debug, Clone, serde::Serialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique display username.
    pub username: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("username and password required")]
    MissingFields,
    #[error("username already exists")]
    UsernameTaken,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Reject empty-or-missing credential fields before touching the store.
pub fn validate_fields(username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    Ok(())
}

/// Hash a password with the fixed bcrypt cost. Salting is per-hash.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// Verify a password against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}

/// Register a new user. One row inserted on success.
///
/// # Errors
///
/// `MissingFields` when either field is empty, `UsernameTaken` when the
/// unique constraint rejects the insert, `Db`/`Hash` on store or crypto
/// failure.
pub async fn register(pool: &PgPool, username: &str, password: &str) -> Result<User, AuthError> {
    validate_fields(username, password)?;

    let password_hash = hash_password(password)?;

    let row = sqlx::query(
        r"INSERT INTO users (username, password_hash)
          VALUES ($1, $2)
          RETURNING id",
    )
    .bind(username)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
            AuthError::UsernameTaken
        } else {
            AuthError::Db(e)
        }
    })?;

    Ok(User { id: row.get("id"), username: username.to_owned() })
}

/// Authenticate an existing user.
///
/// # Errors
///
/// `InvalidCredentials` for an unknown username or a non-matching password,
/// `Db`/`Hash` on store or crypto failure.
pub async fn login(pool: &PgPool, username: &str, password: &str) -> Result<User, AuthError> {
    validate_fields(username, password)?;

    let row = sqlx::query("SELECT id, username, password_hash FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(AuthError::InvalidCredentials);
    };

    let password_hash: String = row.get("password_hash");
    if !verify_password(password, &password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(User { id: row.get("id"), username: row.get("username") })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
