//! # client
//!
//! Leptos + WASM storefront for the PC Parts Shop. Replaces the React
//! front end with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state (auth session
//! and cart), the static product catalog, and the REST helpers that talk to
//! the auth API.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
