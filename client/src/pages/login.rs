//! Login page with username + password credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::session;

/// Trim the username and require both fields before calling the backend.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(body) => {
                    session::complete_login(auth, &body.token, body.user);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/home");
                    }
                }
                Err(e) => {
                    error.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, auth);
        }
    };

    view! {
        <main class="login-page">
            <div class="container">
                <section class="login-header">
                    <h1>"Login"</h1>
                    <p>"Sign in to start shopping"</p>
                </section>
                <div class="login-form-container">
                    <form class="login-form" on:submit=on_submit>
                        <Show when=move || !error.get().is_empty()>
                            <div class="error-message">{move || error.get()}</div>
                        </Show>
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <input
                                type="text"
                                id="username"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </div>
                        <button type="submit" class="login-btn" disabled=move || busy.get()>
                            {move || if busy.get() { "Logging in..." } else { "Login" }}
                        </button>
                        <div class="register-link">
                            <p>"Don't have an account? " <a href="/register">"Register here"</a></p>
                        </div>
                    </form>
                </div>
            </div>
        </main>
    }
}
