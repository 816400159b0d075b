use super::*;
use crate::net::types::User;

#[test]
fn no_redirect_while_loading() {
    assert!(!should_redirect(&AuthState::default()));
}

#[test]
fn redirect_once_resolved_without_user() {
    assert!(should_redirect(&AuthState::logged_out()));
}

#[test]
fn no_redirect_when_logged_in() {
    let user = User { id: "u1".to_owned(), username: "alice".to_owned() };
    assert!(!should_redirect(&AuthState::logged_in(user)));
}
