use super::*;

fn sample_user() -> User {
    User { id: "5f6d2c1e-0000-0000-0000-000000000001".to_owned(), username: "alice".to_owned() }
}

// =============================================================================
// Initial state
// =============================================================================

#[test]
fn default_state_is_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn logged_in_resolves_loading_and_sets_user() {
    let state = AuthState::logged_in(sample_user());
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.user.map(|u| u.username), Some("alice".to_owned()));
}

#[test]
fn logged_out_resolves_loading_without_user() {
    let state = AuthState::logged_out();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn resolved_none_equals_logged_out() {
    assert_eq!(AuthState::resolved(None), AuthState::logged_out());
}
