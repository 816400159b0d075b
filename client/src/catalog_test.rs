use std::collections::HashSet;

use super::*;

#[test]
fn product_ids_are_unique() {
    let mut seen = HashSet::new();
    for product in PRODUCTS {
        assert!(seen.insert(product.id), "duplicate product id {}", product.id);
    }
}

#[test]
fn every_category_has_products() {
    for category in Category::ALL {
        assert!(!products_in(category).is_empty(), "empty category {category:?}");
    }
}

#[test]
fn products_in_filters_by_category() {
    for product in products_in(Category::Gpus) {
        assert_eq!(product.category, Category::Gpus);
    }
}

#[test]
fn find_product_hits_and_misses() {
    assert_eq!(find_product("cpu-ryzen-7600").map(|p| p.name), Some("AMD Ryzen 5 7600"));
    assert!(find_product("cpu-does-not-exist").is_none());
}

#[test]
fn category_paths_are_absolute_and_distinct() {
    let mut seen = HashSet::new();
    for category in Category::ALL {
        assert!(category.path().starts_with('/'));
        assert!(seen.insert(category.path()));
    }
}

#[test]
fn format_price_pads_cents() {
    assert_eq!(format_price(22_999), "$229.99");
    assert_eq!(format_price(5_00), "$5.00");
    assert_eq!(format_price(7), "$0.07");
}

#[test]
fn prices_are_positive() {
    for product in PRODUCTS {
        assert!(product.price_cents > 0, "non-positive price for {}", product.id);
    }
}
