//! Shared client state stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores are constructed once in `app::App`, provided via Leptos context,
//! and read/written by pages and components. `auth` gates the protected
//! routes; `cart` backs the navbar badge and the cart page.

pub mod auth;
pub mod cart;
