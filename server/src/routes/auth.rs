//! Auth routes — register, login, check-auth, logout.
//!
//! ERROR HANDLING
//! ==============
//! Service errors are mapped onto the wire contract here: missing
//! fields and duplicate usernames are 400, bad credentials are 401, and any
//! store/crypto failure becomes a generic 500 whose detail is only logged.
//! Token verification failures never escape check-auth; they degrade to a
//! logged-out response.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::auth::{self as auth_svc, AuthError, User};
use crate::services::token::{self, JwtKeys};
use crate::state::AppState;

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Request body shared by register and login. Missing fields deserialize to
/// empty strings so they fail validation instead of body parsing.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Success body for register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: String,
    pub user: User,
}

/// Body for check-auth. `isLoggedIn` is camelCase on the wire.
#[derive(Debug, Serialize)]
pub struct CheckAuthResponse {
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl CheckAuthResponse {
    fn logged_out() -> Self {
        Self { is_logged_in: false, user: None }
    }
}

fn error_response(status: StatusCode, message: &'static str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

fn register_failure(e: &AuthError) -> (StatusCode, &'static str) {
    match e {
        AuthError::MissingFields => (StatusCode::BAD_REQUEST, "Username and password required"),
        AuthError::UsernameTaken => (StatusCode::BAD_REQUEST, "Username already exists"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Registration failed"),
    }
}

fn login_failure(e: &AuthError) -> (StatusCode, &'static str) {
    match e {
        AuthError::MissingFields => (StatusCode::BAD_REQUEST, "Username and password required"),
        AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Login failed"),
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() { None } else { Some(token) }
}

/// Resolve a presented token into a check-auth outcome. All verification
/// failures collapse into the logged-out response.
fn check_outcome(keys: &JwtKeys, token: Option<&str>) -> CheckAuthResponse {
    let Some(token) = token else {
        return CheckAuthResponse::logged_out();
    };
    match token::verify(keys, token) {
        Ok(claims) => match claims.user_id() {
            Ok(id) => CheckAuthResponse {
                is_logged_in: true,
                user: Some(User { id, username: claims.username }),
            },
            Err(_) => CheckAuthResponse::logged_out(),
        },
        Err(e) => {
            tracing::debug!(error = %e, "check-auth token rejected");
            CheckAuthResponse::logged_out()
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/register` — create a user, mint a session token.
pub async fn register(State(state): State<AppState>, Json(body): Json<CredentialsRequest>) -> Response {
    let user = match auth_svc::register(&state.pool, &body.username, &body.password).await {
        Ok(user) => user,
        Err(e) => {
            let (status, message) = register_failure(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "register failed");
            }
            return error_response(status, message);
        }
    };

    match token::mint(&state.jwt, &user) {
        Ok(tok) => (
            StatusCode::CREATED,
            Json(AuthResponse {
                success: true,
                message: "User registered successfully",
                token: tok,
                user,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "token mint failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Registration failed")
        }
    }
}

/// `POST /api/login` — verify credentials, mint a session token.
pub async fn login(State(state): State<AppState>, Json(body): Json<CredentialsRequest>) -> Response {
    let user = match auth_svc::login(&state.pool, &body.username, &body.password).await {
        Ok(user) => user,
        Err(e) => {
            let (status, message) = login_failure(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "login failed");
            }
            return error_response(status, message);
        }
    };

    match token::mint(&state.jwt, &user) {
        Ok(tok) => Json(AuthResponse {
            success: true,
            message: "Login successful",
            token: tok,
            user,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "token mint failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Login failed")
        }
    }
}

/// `GET /api/check-auth` — report logged-in state for a bearer token.
pub async fn check_auth(State(state): State<AppState>, headers: HeaderMap) -> Json<CheckAuthResponse> {
    Json(check_outcome(&state.jwt, bearer_token(&headers)))
}

/// `POST /api/logout` — stateless no-op; real logout is client-side token
/// deletion.
pub async fn logout() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "success": true }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
