//! Total inventory value.

use crate::types::ProductCollection;

/// Sum of `price * stock` over all products. An empty collection yields `0.0`.
pub fn calculate_total_value(products: &ProductCollection) -> f64 {
    products.reduce_products(0.0, |acc, p| acc + p.value())
}

#[cfg(test)]
mod tests {
    use super::calculate_total_value;
    use crate::types::{Product, ProductCollection};

    #[test]
    fn total_value_sums_price_times_stock() {
        let products = ProductCollection::new(vec![
            Product::new("Product 1", 100.0, 1),
            Product::new("Product 2", 200.0, 2),
            Product::new("Product 3", 300.0, 3),
        ]);
        assert_eq!(calculate_total_value(&products), 1400.0);
    }

    #[test]
    fn total_value_of_empty_collection_is_zero() {
        assert_eq!(calculate_total_value(&ProductCollection::default()), 0.0);
    }

    #[test]
    fn out_of_stock_products_contribute_nothing() {
        let products = ProductCollection::new(vec![
            Product::new("gone", 999.0, 0),
            Product::new("kept", 2.5, 4),
        ]);
        assert_eq!(calculate_total_value(&products), 10.0);
    }
}
