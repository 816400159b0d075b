//! REST API helpers for communicating with the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! degrade UI behavior without crashing hydration. The backend's `error`
//! message is propagated when one is present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
#[cfg(feature = "hydrate")]
use super::types::CheckAuthResponse;

pub const REGISTER_ENDPOINT: &str = "/api/register";
pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const CHECK_AUTH_ENDPOINT: &str = "/api/check-auth";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pick the user-facing message for a failed auth call: the backend's error
/// body when present, the caller's fallback otherwise.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_error(parsed: Option<ApiErrorBody>, fallback: &str) -> String {
    parsed.map_or_else(|| fallback.to_owned(), |body| body.error)
}

#[cfg(feature = "hydrate")]
async fn post_credentials(path: &str, username: &str, password: &str, fallback: &str) -> Result<AuthResponse, String> {
    let payload = serde_json::json!({ "username": username, "password": password });
    let resp = gloo_net::http::Request::post(path)
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let parsed = resp.json::<ApiErrorBody>().await.ok();
        return Err(resolve_error(parsed, fallback));
    }
    resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
}

/// Register via `POST /api/register`, returning the token + user body.
///
/// # Errors
///
/// Returns the backend's error message, or a generic one when the request
/// itself fails.
pub async fn register(username: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials(REGISTER_ENDPOINT, username, password, "Registration failed").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Log in via `POST /api/login`, returning the token + user body.
///
/// # Errors
///
/// Returns the backend's error message, or a generic one when the request
/// itself fails.
pub async fn login(username: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials(LOGIN_ENDPOINT, username, password, "Login failed").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Validate a persisted token via `GET /api/check-auth`.
/// Returns `None` when logged out, on any failure, or on the server.
pub async fn check_auth(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CHECK_AUTH_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.json::<CheckAuthResponse>().await.ok()?;
        if body.is_logged_in { body.user } else { None }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Tell the backend about a logout. Stateless no-op server-side; the real
/// logout is the caller clearing the persisted token.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await;
    }
}
