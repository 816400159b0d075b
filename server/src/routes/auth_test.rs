use axum::http::HeaderValue;
use uuid::Uuid;

use super::*;

fn headers_with_auth(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).expect("header"));
    headers
}

// =============================================================================
// Bearer header parsing
// =============================================================================

#[test]
fn bearer_token_extracts_value() {
    let headers = headers_with_auth("Bearer abc.def.ghi");
    assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
}

#[test]
fn bearer_token_missing_header() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}

#[test]
fn bearer_token_rejects_other_schemes() {
    let headers = headers_with_auth("Basic dXNlcjpwdw==");
    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn bearer_token_rejects_empty_token() {
    let headers = headers_with_auth("Bearer ");
    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn bearer_token_is_case_sensitive_on_scheme() {
    let headers = headers_with_auth("bearer abc");
    assert_eq!(bearer_token(&headers), None);
}

// =============================================================================
// Error mapping
// =============================================================================

#[test]
fn register_failure_maps_missing_fields_to_400() {
    let (status, msg) = register_failure(&AuthError::MissingFields);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg, "Username and password required");
}

#[test]
fn register_failure_maps_duplicate_to_400() {
    let (status, msg) = register_failure(&AuthError::UsernameTaken);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg, "Username already exists");
}

#[test]
fn register_failure_maps_store_errors_to_generic_500() {
    let (status, msg) = register_failure(&AuthError::Db(sqlx::Error::PoolClosed));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(msg, "Registration failed");
}

#[test]
fn login_failure_maps_bad_credentials_to_401() {
    let (status, msg) = login_failure(&AuthError::InvalidCredentials);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg, "Invalid username or password");
}

#[test]
fn login_failure_maps_store_errors_to_generic_500() {
    let (status, msg) = login_failure(&AuthError::Db(sqlx::Error::PoolClosed));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(msg, "Login failed");
}

// =============================================================================
// check-auth outcome — failures degrade to logged-out, never an error
// =============================================================================

#[test]
fn check_outcome_no_token_is_logged_out() {
    let keys = JwtKeys::from_secret("test-secret");
    let outcome = check_outcome(&keys, None);
    assert!(!outcome.is_logged_in);
    assert!(outcome.user.is_none());
}

#[test]
fn check_outcome_garbage_token_is_logged_out() {
    let keys = JwtKeys::from_secret("test-secret");
    let outcome = check_outcome(&keys, Some("not.a.jwt"));
    assert!(!outcome.is_logged_in);
    assert!(outcome.user.is_none());
}

#[test]
fn check_outcome_wrong_signature_is_logged_out() {
    let user = User { id: Uuid::new_v4(), username: "alice".to_owned() };
    let token = token::mint(&JwtKeys::from_secret("other-secret"), &user).expect("mint");

    let outcome = check_outcome(&JwtKeys::from_secret("test-secret"), Some(&token));
    assert!(!outcome.is_logged_in);
}

#[test]
fn check_outcome_valid_token_returns_identity() {
    let keys = JwtKeys::from_secret("test-secret");
    let user = User { id: Uuid::new_v4(), username: "alice".to_owned() };
    let token = token::mint(&keys, &user).expect("mint");

    let outcome = check_outcome(&keys, Some(&token));
    assert!(outcome.is_logged_in);
    let decoded = outcome.user.expect("user");
    assert_eq!(decoded.id, user.id);
    assert_eq!(decoded.username, "alice");
}

// =============================================================================
// Handlers — check-auth and logout run without touching the store
// =============================================================================

#[tokio::test]
async fn check_auth_handler_degrades_to_logged_out_without_header() {
    let state = crate::state::test_helpers::test_app_state();
    let Json(body) = check_auth(State(state), HeaderMap::new()).await;
    assert!(!body.is_logged_in);
    assert!(body.user.is_none());
}

#[tokio::test]
async fn check_auth_handler_accepts_minted_bearer_token() {
    let state = crate::state::test_helpers::test_app_state();
    let user = User { id: Uuid::new_v4(), username: "alice".to_owned() };
    let minted = token::mint(&state.jwt, &user).expect("mint");

    let headers = headers_with_auth(&format!("Bearer {minted}"));
    let Json(body) = check_auth(State(state), headers).await;
    assert!(body.is_logged_in);
    assert_eq!(body.user.expect("user").username, "alice");
}

#[tokio::test]
async fn logout_handler_reports_success() {
    let Json(body) = logout().await;
    assert_eq!(body, serde_json::json!({ "success": true }));
}

// =============================================================================
// Wire shapes
// =============================================================================

#[test]
fn credentials_request_defaults_missing_fields_to_empty() {
    let body: CredentialsRequest = serde_json::from_str(r#"{"username":"alice"}"#).expect("parse");
    assert_eq!(body.username, "alice");
    assert_eq!(body.password, "");
}

#[test]
fn check_auth_response_uses_camel_case_flag() {
    let json = serde_json::to_value(CheckAuthResponse::logged_out()).expect("serialize");
    assert_eq!(json, serde_json::json!({ "isLoggedIn": false }));
}

#[test]
fn check_auth_response_includes_user_when_logged_in() {
    let user = User { id: Uuid::new_v4(), username: "alice".to_owned() };
    let json = serde_json::to_value(CheckAuthResponse { is_logged_in: true, user: Some(user.clone()) })
        .expect("serialize");
    assert_eq!(json["isLoggedIn"], serde_json::json!(true));
    assert_eq!(json["user"]["id"], serde_json::json!(user.id.to_string()));
    assert_eq!(json["user"]["username"], serde_json::json!("alice"));
}

#[test]
fn auth_response_carries_success_token_and_user() {
    let user = User { id: Uuid::new_v4(), username: "alice".to_owned() };
    let json = serde_json::to_value(AuthResponse {
        success: true,
        message: "Login successful",
        token: "tok".to_owned(),
        user,
    })
    .expect("serialize");
    assert_eq!(json["success"], serde_json::json!(true));
    assert_eq!(json["token"], serde_json::json!("tok"));
    assert_eq!(json["user"]["username"], serde_json::json!("alice"));
}
