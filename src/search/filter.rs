//! Pure filtering and ordering of fetched products.

use crate::fetcher::types::Product;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Case-insensitive substring match on the product name. The empty term matches everything.
pub fn matches_term(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(&term.to_lowercase())
}

pub fn filter_products(products: Vec<Product>, term: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| matches_term(product, term))
        .collect()
}

/// Base-sensitivity key: case and diacritics are dropped, everything else is kept.
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sorts by name ascending. Stable, so names equal under collation keep their input order.
pub fn sort_by_name(products: &mut [Product]) {
    products.sort_by_cached_key(|product| collation_key(&product.name));
}

pub fn filter_and_sort(products: Vec<Product>, term: &str) -> Vec<Product> {
    let mut matched = filter_products(products, term);
    sort_by_name(&mut matched);
    matched
}
