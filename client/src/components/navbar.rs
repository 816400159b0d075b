//! Top navigation bar with auth-aware links and the cart badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is mounted once above the route tree. It reads the auth store
//! for identity-dependent links and the cart store for the badge count, and
//! owns the mobile hamburger-menu toggle.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::catalog::Category;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::util::session;

/// Brand link target: home when logged in, login otherwise.
fn brand_target(user: Option<&User>) -> &'static str {
    if user.is_some() { "/home" } else { "/login" }
}

/// Badge text for the cart link; hidden entirely at zero.
fn badge_label(count: u32) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

fn menu_class(open: bool) -> &'static str {
    if open { "nav-menu active" } else { "nav-menu" }
}

fn menu_btn_class(open: bool) -> &'static str {
    if open { "menu-btn active" } else { "menu-btn" }
}

/// Site-wide navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let menu_open = RwSignal::new(false);

    let on_toggle = move |_| menu_open.update(|open| *open = !*open);
    let on_logout = move |_| {
        session::logout(auth);
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    let logged_in = move || auth.get().user.is_some();
    let welcome = move || {
        auth.get()
            .user
            .map(|u| format!("Welcome, {}", u.username))
            .unwrap_or_default()
    };

    view! {
        <header>
            <nav class="navbar">
                <div class="nav-brand">
                    <a href=move || brand_target(auth.get().user.as_ref())>"PC Parts Shop"</a>
                </div>
                <button class=move || menu_btn_class(menu_open.get()) on:click=on_toggle>
                    "☰"
                </button>
                <ul class=move || menu_class(menu_open.get())>
                    <Show
                        when=logged_in
                        fallback=move || {
                            view! {
                                <li>
                                    <a href="/login" on:click=move |_| menu_open.set(false)>"Login"</a>
                                </li>
                                <li>
                                    <a href="/register" on:click=move |_| menu_open.set(false)>"Register"</a>
                                </li>
                            }
                        }
                    >
                        <li>
                            <a href="/home" on:click=move |_| menu_open.set(false)>"Home"</a>
                        </li>
                        {Category::ALL
                            .iter()
                            .map(|category| {
                                view! {
                                    <li>
                                        <a
                                            href=category.path()
                                            on:click=move |_| menu_open.set(false)
                                        >
                                            {category.title()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                        <li>
                            <a href="/contact" on:click=move |_| menu_open.set(false)>"Contact Us"</a>
                        </li>
                        <li>
                            <a href="/cart" class="cart-link" on:click=move |_| menu_open.set(false)>
                                "Cart"
                                {move || {
                                    badge_label(cart.get().item_count())
                                        .map(|label| view! { <span class="cart-count">{label}</span> })
                                }}
                            </a>
                        </li>
                        <li class="user-info">
                            <span>{welcome}</span>
                        </li>
                        <li>
                            <button class="logout-btn" on:click=on_logout>
                                "Logout"
                            </button>
                        </li>
                    </Show>
                </ul>
            </nav>
        </header>
    }
}
