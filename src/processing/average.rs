//! Average price over a [`crate::types::ProductCollection`].

use crate::error::{InventoryError, InventoryResult};
use crate::types::ProductCollection;

/// Arithmetic mean of the `price` field over all products.
///
/// Returns [`InventoryError::DivisionByZero`] if `products` is empty; no default value is
/// substituted.
pub fn calculate_average_price(products: &ProductCollection) -> InventoryResult<f64> {
    if products.is_empty() {
        return Err(InventoryError::DivisionByZero {
            operation: "average_price",
        });
    }

    let total_price = products.reduce_products(0.0, |acc, p| acc + p.price);
    Ok(total_price / products.len() as f64)
}
