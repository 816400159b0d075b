use uuid::Uuid;

use super::*;

fn sample_user() -> User {
    User { id: Uuid::new_v4(), username: "builder".to_owned() }
}

// =============================================================================
// Mint / verify round trip
// =============================================================================

#[test]
fn mint_then_verify_preserves_identity() {
    let keys = JwtKeys::from_secret("unit-test-secret");
    let user = sample_user();

    let token = mint(&keys, &user).expect("mint");
    let claims = verify(&keys, &token).expect("verify");

    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.username, user.username);
    assert_eq!(claims.user_id().expect("uuid"), user.id);
}

#[test]
fn minted_token_expires_seven_days_out() {
    let keys = JwtKeys::from_secret("unit-test-secret");
    let token = mint(&keys, &sample_user()).expect("mint");
    let claims = verify(&keys, &token).expect("verify");

    assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
}

// =============================================================================
// Verification failures
// =============================================================================

#[test]
fn wrong_secret_fails_verification() {
    let token = mint(&JwtKeys::from_secret("secret-a"), &sample_user()).expect("mint");
    assert!(verify(&JwtKeys::from_secret("secret-b"), &token).is_err());
}

#[test]
fn malformed_token_fails_verification() {
    let keys = JwtKeys::from_secret("unit-test-secret");
    assert!(verify(&keys, "not.a.token").is_err());
    assert!(verify(&keys, "").is_err());
}

#[test]
fn tampered_payload_fails_verification() {
    let keys = JwtKeys::from_secret("unit-test-secret");
    let token = mint(&keys, &sample_user()).expect("mint");

    // Flip a character inside the payload segment.
    let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
    assert_eq!(parts.len(), 3);
    let mut payload: Vec<u8> = parts[1].clone().into_bytes();
    payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
    parts[1] = String::from_utf8(payload).expect("ascii");

    assert!(verify(&keys, &parts.join(".")).is_err());
}

#[test]
fn expired_token_fails_verification() {
    let keys = JwtKeys::from_secret("unit-test-secret");
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    // Past the default validation leeway.
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "builder".to_owned(),
        iat: now - TOKEN_TTL_SECS,
        exp: now - 120,
    };
    let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");

    assert!(verify(&keys, &token).is_err());
}

#[test]
fn claims_with_non_uuid_subject_rejects_user_id() {
    let claims = Claims { sub: "42".to_owned(), username: "builder".to_owned(), iat: 0, exp: 0 };
    assert!(claims.user_id().is_err());
}
