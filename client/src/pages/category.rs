//! Product category page — static catalog display with add-to-cart.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::catalog::{Category, products_in};
use crate::components::product_card::ProductCard;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// One storefront page per category; the route decides which.
#[component]
pub fn CategoryPage(category: Category) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <main class="category-page">
            <div class="container">
                <section class="category-header">
                    <h1>{category.title()}</h1>
                </section>
                <div class="product-grid">
                    {products_in(category)
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product/> })
                        .collect_view()}
                </div>
            </div>
        </main>
    }
}
