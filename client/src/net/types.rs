//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field for field (including
//! the `isLoggedIn` casing) so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth endpoints. Serialize is
/// derived because the session persists the user to `localStorage`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display username.
    pub username: String,
}

/// Success body of `POST /api/register` and `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub token: String,
    pub user: User,
}

/// Body of `GET /api/check-auth`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CheckAuthResponse {
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
    #[serde(default)]
    pub user: Option<User>,
}

/// Error body shared by all failing auth endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
