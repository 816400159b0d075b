//! Registration page with username, password, and confirmation fields.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::session;

/// Minimum password length accepted client-side.
const MIN_PASSWORD_LEN: usize = 3;

/// Validate the registration form before calling the backend. Error strings
/// are the ones shown in the form banner.
fn validate_register_input(
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 3 characters");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_register_input(&username.get(), &password.get(), &confirm.get()) {
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
            match crate::net::api::register(&username_value, &password_value).await {
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
        <main class="register-page">
            <div class="container">
                <section class="register-header">
                    <h1>"Register"</h1>
                    <p>"Create a new account to start shopping"</p>
                </section>
                <div class="register-form-container">
                    <form class="register-form" on:submit=on_submit>
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
                        <div class="form-group">
                            <label for="confirmPassword">"Confirm Password"</label>
                            <input
                                type="password"
                                id="confirmPassword"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </div>
                        <button type="submit" class="register-btn" disabled=move || busy.get()>
                            {move || if busy.get() { "Registering..." } else { "Register" }}
                        </button>
                        <div class="login-link">
                            <p>"Already have an account? " <a href="/login">"Login here"</a></p>
                        </div>
                    </form>
                </div>
            </div>
        </main>
    }
}
