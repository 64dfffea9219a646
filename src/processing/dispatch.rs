//! Higher-order dispatch of computations over a [`crate::types::ProductCollection`].

use std::fmt;

use crate::error::{InventoryError, InventoryResult};
use crate::types::ProductCollection;

use super::{calculate_average_price, calculate_total_value, filter_products_by_stock};

/// Apply `computation` to `products` and the extra arguments `args`, returning its result
/// unchanged.
///
/// Extra arguments are a single value: pass `()` when the computation needs none and a tuple
/// when it needs several.
pub fn manage_inventory<A, R, F>(products: &ProductCollection, computation: F, args: A) -> R
where
    F: FnOnce(&ProductCollection, A) -> R,
{
    computation(products, args)
}

/// [`manage_inventory`] for computations that take no extra arguments.
pub fn manage_inventory_with<R, F>(products: &ProductCollection, computation: F) -> R
where
    F: FnOnce(&ProductCollection) -> R,
{
    manage_inventory(products, |p, ()| computation(p), ())
}

/// Built-in computations, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Computation {
    /// Mean price (fails on an empty collection).
    AveragePrice,
    /// Sum of `price * stock`.
    TotalValue,
    /// Products with `stock >= min_stock`.
    FilterByStock { min_stock: i64 },
}

impl Computation {
    /// Resolve a computation from its name and string arguments.
    ///
    /// Names are matched case-insensitively and `-` is accepted in place of `_`.
    pub fn parse(name: &str, args: &[String]) -> InventoryResult<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        let arity = match normalized.as_str() {
            "average_price" | "total_value" => 0,
            "filter_by_stock" => 1,
            _ => {
                return Err(InventoryError::Invocation {
                    computation: name.to_string(),
                    message: "unknown computation (expected average_price, total_value or filter_by_stock)"
                        .to_string(),
                });
            }
        };

        if args.len() != arity {
            return Err(InventoryError::Invocation {
                computation: normalized,
                message: format!("expected {arity} argument(s), got {}", args.len()),
            });
        }

        match normalized.as_str() {
            "average_price" => Ok(Self::AveragePrice),
            "total_value" => Ok(Self::TotalValue),
            _ => {
                let raw = args[0].trim();
                let min_stock = raw.parse::<i64>().map_err(|e| InventoryError::Invocation {
                    computation: normalized.clone(),
                    message: format!("min_stock must be an integer (raw='{raw}'): {e}"),
                })?;
                Ok(Self::FilterByStock { min_stock })
            }
        }
    }

    /// Canonical name of this computation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AveragePrice => "average_price",
            Self::TotalValue => "total_value",
            Self::FilterByStock { .. } => "filter_by_stock",
        }
    }

    /// Apply this computation to `products` through [`manage_inventory`].
    pub fn apply(&self, products: &ProductCollection) -> InventoryResult<ComputationOutput> {
        match *self {
            Self::AveragePrice => {
                manage_inventory_with(products, calculate_average_price).map(ComputationOutput::Number)
            }
            Self::TotalValue => Ok(ComputationOutput::Number(manage_inventory_with(
                products,
                calculate_total_value,
            ))),
            Self::FilterByStock { min_stock } => Ok(ComputationOutput::Products(manage_inventory(
                products,
                filter_products_by_stock,
                min_stock,
            ))),
        }
    }
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilterByStock { min_stock } => write!(f, "{}(min_stock={min_stock})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Result of a [`Computation`]: a number or a derived collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationOutput {
    /// Scalar aggregate.
    Number(f64),
    /// Filtered products.
    Products(ProductCollection),
}

impl ComputationOutput {
    /// The scalar value, if this output is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Products(_) => None,
        }
    }

    /// The collection, if this output is a set of products.
    pub fn into_products(self) -> Option<ProductCollection> {
        match self {
            Self::Products(p) => Some(p),
            Self::Number(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{manage_inventory, manage_inventory_with, Computation, ComputationOutput};
    use crate::error::InventoryError;
    use crate::processing::{calculate_average_price, calculate_total_value, filter_products_by_stock};
    use crate::types::{Product, ProductCollection};

    fn sample_products() -> ProductCollection {
        ProductCollection::new(vec![
            Product::new("Product 1", 100.0, 1),
            Product::new("Product 2", 200.0, 2),
            Product::new("Product 3", 300.0, 5),
        ])
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dispatch_forwards_custom_sum_of_prices() {
        let products = ProductCollection::new(vec![
            Product::new("Product 1", 100.0, 1),
            Product::new("Product 2", 200.0, 2),
        ]);
        let sum_price = |products: &ProductCollection| products.iter().map(|p| p.price).sum::<f64>();

        assert_eq!(manage_inventory_with(&products, sum_price), 300.0);
        assert_eq!(manage_inventory_with(&products, sum_price), sum_price(&products));
    }

    #[test]
    fn dispatch_forwards_extra_arguments() {
        let products = sample_products();
        let filter_low_stock = |products: &ProductCollection, threshold: u32| {
            products.filter_products(|p| p.stock < threshold)
        };

        let out = manage_inventory(&products, filter_low_stock, 3);
        assert_eq!(out.len(), 2);
        assert_eq!(out.products[0].name, "Product 1");
        assert_eq!(out, filter_low_stock(&products, 3));
    }

    #[test]
    fn dispatch_forwards_tuple_arguments() {
        let products = sample_products();
        let in_band = |products: &ProductCollection, (lo, hi): (u32, u32)| {
            products.filter_products(|p| p.stock >= lo && p.stock <= hi)
        };
        assert_eq!(manage_inventory(&products, in_band, (2, 5)).len(), 2);
    }

    #[test]
    fn dispatch_is_transparent_for_built_in_computations() {
        let products = sample_products();
        assert_eq!(
            manage_inventory_with(&products, calculate_average_price),
            calculate_average_price(&products)
        );
        assert_eq!(
            manage_inventory_with(&products, calculate_total_value),
            calculate_total_value(&products)
        );
        assert_eq!(
            manage_inventory(&products, filter_products_by_stock, 2),
            filter_products_by_stock(&products, 2)
        );
    }

    #[test]
    fn dispatch_propagates_errors_unchanged() {
        let err = manage_inventory_with(&ProductCollection::default(), calculate_average_price).unwrap_err();
        assert!(matches!(err, InventoryError::DivisionByZero { .. }));
    }

    #[test]
    fn parse_resolves_names_and_arguments() {
        assert_eq!(Computation::parse("average_price", &[]), Ok(Computation::AveragePrice));
        assert_eq!(Computation::parse("Total-Value", &[]), Ok(Computation::TotalValue));
        assert_eq!(
            Computation::parse("filter_by_stock", &args(&["20"])),
            Ok(Computation::FilterByStock { min_stock: 20 })
        );
        assert_eq!(
            Computation::parse("filter-by-stock", &args(&[" -1 "])),
            Ok(Computation::FilterByStock { min_stock: -1 })
        );
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = Computation::parse("median_price", &[]).unwrap_err();
        assert!(matches!(err, InventoryError::Invocation { ref computation, .. } if computation == "median_price"));
        assert!(err.to_string().contains("unknown computation"));
    }

    #[test]
    fn parse_rejects_arity_mismatch() {
        let err = Computation::parse("filter_by_stock", &[]).unwrap_err();
        assert!(err.to_string().contains("expected 1 argument(s), got 0"));

        let err = Computation::parse("total_value", &args(&["3"])).unwrap_err();
        assert!(err.to_string().contains("expected 0 argument(s), got 1"));
    }

    #[test]
    fn parse_rejects_non_integer_threshold() {
        let err = Computation::parse("filter_by_stock", &args(&["twenty"])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("cannot invoke computation 'filter_by_stock'"));
        assert!(msg.contains("raw='twenty'"));
    }

    #[test]
    fn apply_matches_direct_calls() {
        let products = sample_products();
        assert_eq!(
            Computation::AveragePrice.apply(&products),
            Ok(ComputationOutput::Number(200.0))
        );
        assert_eq!(
            Computation::TotalValue.apply(&products).unwrap().as_number(),
            Some(calculate_total_value(&products))
        );
        assert_eq!(
            Computation::FilterByStock { min_stock: 2 }
                .apply(&products)
                .unwrap()
                .into_products(),
            Some(filter_products_by_stock(&products, 2))
        );
    }

    #[test]
    fn display_includes_threshold() {
        assert_eq!(Computation::TotalValue.to_string(), "total_value");
        assert_eq!(
            Computation::FilterByStock { min_stock: 20 }.to_string(),
            "filter_by_stock(min_stock=20)"
        );
    }
}
