//! Client-local shopping cart state.
//!
//! DESIGN
//! ======
//! The cart lives entirely in browser memory for the tab's lifetime and is
//! never sent to or validated by the backend. Entries keep insertion order
//! and are keyed by product id; adding an existing product increments its
//! quantity instead of appending a duplicate row.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::catalog::Product;

/// One cart line: a product reference plus quantity. Name and price are
/// copied from the catalog so the cart page renders without lookups.
#[derive(Clone, Debug, PartialEq)]
pub struct CartEntry {
    pub product_id: String,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
}

/// Ordered cart contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub entries: Vec<CartEntry>,
}

impl CartState {
    /// Add one unit of `product`, merging into an existing entry if present.
    pub fn add(&mut self, product: &Product) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product.id) {
            entry.quantity += 1;
            return;
        }
        self.entries.push(CartEntry {
            product_id: product.id.to_owned(),
            name: product.name.to_owned(),
            price_cents: product.price_cents,
            quantity: 1,
        });
    }

    /// Drop the entry for `product_id`, if any.
    pub fn remove(&mut self, product_id: &str) {
        self.entries.retain(|e| e.product_id != product_id);
    }

    /// Set an entry's quantity; zero removes the entry.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product_id) {
            entry.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total units across all entries; the navbar badge number.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Sum of price × quantity across entries, in cents.
    #[must_use]
    pub fn subtotal_cents(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| e.price_cents * i64::from(e.quantity))
            .sum()
    }
}
