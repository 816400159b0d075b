use super::*;

// =============================================================================
// Field validation
// =============================================================================

#[test]
fn validate_fields_accepts_both_present() {
    assert!(validate_fields("alice", "hunter2").is_ok());
}

#[test]
fn validate_fields_rejects_empty_username() {
    assert!(matches!(validate_fields("", "hunter2"), Err(AuthError::MissingFields)));
}

#[test]
fn validate_fields_rejects_empty_password() {
    assert!(matches!(validate_fields("alice", ""), Err(AuthError::MissingFields)));
}

#[test]
fn validate_fields_rejects_both_empty() {
    assert!(matches!(validate_fields("", ""), Err(AuthError::MissingFields)));
}

// =============================================================================
// Password hashing
// =============================================================================

#[test]
fn hash_then_verify_roundtrip() {
    let hash = hash_password("correct horse").expect("hash");
    assert!(verify_password("correct horse", &hash).expect("verify"));
}

#[test]
fn verify_rejects_wrong_password() {
    let hash = hash_password("correct horse").expect("hash");
    assert!(!verify_password("battery staple", &hash).expect("verify"));
}

#[test]
fn hashes_are_salted() {
    let a = hash_password("same password").expect("hash");
    let b = hash_password("same password").expect("hash");
    assert_ne!(a, b);
}

#[test]
fn hash_embeds_configured_cost() {
    let hash = hash_password("pw").expect("hash");
    // Modular crypt format: $2b$<cost>$...
    assert!(hash.starts_with("$2"), "unexpected hash format: {hash}");
    assert!(hash.contains("$10$"), "expected cost 10 in {hash}");
}

#[test]
fn verify_errors_on_garbage_hash() {
    assert!(verify_password("pw", "not-a-bcrypt-hash").is_err());
}
