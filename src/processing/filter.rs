//! Stock filtering for [`crate::types::ProductCollection`].

use crate::types::ProductCollection;

/// Returns a new collection with every product whose `stock >= min_stock`.
///
/// The threshold is inclusive and may be negative (everything matches). Relative order is
/// preserved and the input is left unchanged.
pub fn filter_products_by_stock(products: &ProductCollection, min_stock: i64) -> ProductCollection {
    products.filter_products(|p| i64::from(p.stock) >= min_stock)
}
