//! Browser localStorage persistence for the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token and user are persisted under the `token` and `user`
//! storage keys so a reload can re-check the session with one round trip.
//! All access is hydrate-only; on the server these helpers are inert.

use crate::net::types::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persist the token and user after a successful login or register.
pub fn save_session(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else { return };
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(raw) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Load the persisted session token, if any.
#[must_use]
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Load the persisted user, if any.
#[must_use]
pub fn load_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(USER_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the persisted token and user. Synchronous; this is the real
/// logout.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else { return };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
