//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the navbar to coordinate login redirects and
//! identity-dependent rendering. `loading` starts true and flips false once
//! the initial check-auth round trip resolves, so guarded routes wait for
//! exactly one round trip before deciding.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// State after the initial session check resolved.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn logged_in(user: User) -> Self {
        Self::resolved(Some(user))
    }

    #[must_use]
    pub fn logged_out() -> Self {
        Self::resolved(None)
    }

    /// True once the session check has resolved with a user present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}
