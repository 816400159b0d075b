//! Product card for category pages.

use leptos::prelude::*;

use crate::catalog::{Product, format_price};
use crate::state::cart::CartState;

/// One catalog entry with an add-to-cart action.
#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let on_add = move |_| cart.update(|c| c.add(product));

    view! {
        <div class="product-card">
            <h3 class="product-card__name">{product.name}</h3>
            <p class="product-card__blurb">{product.blurb}</p>
            <div class="product-card__footer">
                <span class="product-card__price">{format_price(product.price_cents)}</span>
                <button class="product-card__add" on:click=on_add>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
