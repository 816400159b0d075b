//! Session token minting and verification.
//!
//! ARCHITECTURE
//! ============
//! Sessions are stateless: a signed, time-limited JWT carries the user's
//! identity and nothing is persisted server-side. Possession of a valid,
//! unexpired, correctly-signed token is the sole authorization check, so
//! logout is purely a client-side token deletion.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::User;

/// Token lifetime: seven days from issuance.
const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

const DEFAULT_SECRET: &str = "railway-secret-key";

/// Signed claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id (UUID string).
    pub sub: String,
    /// Display username, echoed so check-auth can answer without a DB read.
    pub username: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Parse the subject back into a user id.
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::MalformedSubject)
    }
}

/// HS256 signing keys derived from the shared secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token rejected: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("token subject is not a user id")]
    MalformedSubject,
}

impl JwtKeys {
    /// Build keys from an explicit secret.
    #[must_use]
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Load the secret from `JWT_SECRET`. Falls back to a hardcoded default
    /// when unset so local runs work without configuration.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Self::from_secret(&secret),
            _ => {
                tracing::warn!("JWT_SECRET not set — using insecure default secret");
                Self::from_secret(DEFAULT_SECRET)
            }
        }
    }
}

/// Sign a session token for `user`, expiring [`TOKEN_TTL_SECS`] from now.
pub fn mint(keys: &JwtKeys, user: &User) -> Result<String, TokenError> {
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };
    Ok(encode(&Header::default(), &claims, &keys.encoding)?)
}

/// Verify signature and expiry, returning the decoded claims.
///
/// # Errors
///
/// Returns an error for malformed, expired, or wrongly-signed tokens. The
/// check-auth handler swallows these into a logged-out response.
pub fn verify(keys: &JwtKeys, token: &str) -> Result<Claims, TokenError> {
    let data = decode::<Claims>(token, &keys.decoding, &Validation::new(Algorithm::HS256))?;
    Ok(data.claims)
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
