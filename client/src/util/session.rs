//! Session lifecycle: hydrate on load, persist on login, clear on logout.
//!
//! ARCHITECTURE
//! ============
//! The auth store starts in `loading` and resolves after exactly one
//! check-auth round trip against the persisted token. A token the backend
//! rejects (expired, malformed, wrong signature) clears the persisted state
//! and resolves to logged-out. Rendering of guarded routes waits on this.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::persistence;

/// Resolve the persisted session once on mount.
pub fn init_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(token) = persistence::load_token() else {
            auth.set(AuthState::logged_out());
            return;
        };
        match crate::net::api::check_auth(&token).await {
            Some(user) => auth.set(AuthState::logged_in(user)),
            None => {
                persistence::clear_session();
                auth.set(AuthState::logged_out());
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Persist and publish a fresh session after login or register.
pub fn complete_login(auth: RwSignal<AuthState>, token: &str, user: User) {
    persistence::save_session(token, &user);
    auth.set(AuthState::logged_in(user));
}

/// Tear the session down: clear persisted state synchronously, reset the
/// store, and notify the (stateless) backend.
pub fn logout(auth: RwSignal<AuthState>) {
    persistence::clear_session();
    auth.set(AuthState::logged_out());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        crate::net::api::logout().await;
    });
}
