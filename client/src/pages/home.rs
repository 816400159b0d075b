//! Authenticated landing page with category shortcuts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::catalog::Category;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <main class="home-page">
            <div class="container">
                <section class="home-hero">
                    <h1>"PC Parts Shop"</h1>
                    <p>"Everything you need for your next build."</p>
                </section>
                <div class="category-grid">
                    {Category::ALL
                        .iter()
                        .map(|category| {
                            view! {
                                <a href=category.path() class="category-tile">
                                    <h2>{category.title()}</h2>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </main>
    }
}
