//! Cart page — review entries, adjust quantities, see the subtotal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Checkout is out of scope; the cart never leaves the browser. This page is
//! a pure view over `CartState` with quantity controls per line.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::catalog::format_price;
use crate::state::auth::AuthState;
use crate::state::cart::{CartEntry, CartState};
use crate::util::auth::install_unauth_redirect;

/// Price × quantity for one cart line, in cents.
fn line_total_cents(entry: &CartEntry) -> i64 {
    entry.price_cents * i64::from(entry.quantity)
}

#[component]
pub fn CartPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    install_unauth_redirect(auth, use_navigate());

    let entries = move || cart.get().entries;
    let is_empty = move || cart.get().is_empty();
    let subtotal = move || format_price(cart.get().subtotal_cents());

    view! {
        <main class="cart-page">
            <div class="container">
                <section class="cart-header">
                    <h1>"Your Cart"</h1>
                </section>
                <Show
                    when=move || !is_empty()
                    fallback=|| {
                        view! {
                            <div class="cart-empty">
                                <p>"Your cart is empty."</p>
                                <a href="/home">"Continue shopping"</a>
                            </div>
                        }
                    }
                >
                    <ul class="cart-list">
                        <For
                            each=entries
                            key=|entry| entry.product_id.clone()
                            children=move |entry: CartEntry| {
                                let id_dec = entry.product_id.clone();
                                let id_inc = entry.product_id.clone();
                                let id_remove = entry.product_id.clone();
                                let quantity = entry.quantity;
                                let total = format_price(line_total_cents(&entry));
                                view! {
                                    <li class="cart-item">
                                        <span class="cart-item__name">{entry.name.clone()}</span>
                                        <span class="cart-item__price">
                                            {format_price(entry.price_cents)}
                                        </span>
                                        <div class="cart-item__quantity">
                                            <button on:click=move |_| {
                                                cart.update(|c| c.set_quantity(&id_dec, quantity.saturating_sub(1)));
                                            }>"−"</button>
                                            <span>{quantity}</span>
                                            <button on:click=move |_| {
                                                cart.update(|c| c.set_quantity(&id_inc, quantity + 1));
                                            }>"+"</button>
                                        </div>
                                        <span class="cart-item__total">{total}</span>
                                        <button
                                            class="cart-item__remove"
                                            on:click=move |_| cart.update(|c| c.remove(&id_remove))
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <div class="cart-summary">
                        <span>"Subtotal"</span>
                        <span class="cart-summary__amount">{subtotal}</span>
                    </div>
                </Show>
            </div>
        </main>
    }
}
