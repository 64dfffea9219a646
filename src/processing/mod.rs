//! In-memory inventory computations.
//!
//! The processing layer operates on [`crate::types::ProductCollection`] values. Every function
//! here is pure: inputs are borrowed and results are fresh values.
//!
//! Currently implemented:
//!
//! - [`calculate_average_price()`]: mean price (fails on an empty collection)
//! - [`calculate_total_value()`]: sum of `price * stock`
//! - [`filter_products_by_stock()`]: products with `stock >= min_stock`, in order
//! - [`manage_inventory()`]: apply any computation (plus extra arguments) to a collection
//!
//! ## Example: filter → average
//!
//! ```rust
//! use inventory_calculator::processing::{
//!     calculate_average_price, filter_products_by_stock, manage_inventory, manage_inventory_with,
//! };
//! use inventory_calculator::types::{Product, ProductCollection};
//!
//! let products = ProductCollection::new(vec![
//!     Product::new("Laptop", 800.0, 5),
//!     Product::new("Mouse", 10.0, 40),
//!     Product::new("Keyboard", 20.0, 30),
//! ]);
//!
//! let well_stocked = manage_inventory(&products, filter_products_by_stock, 20);
//! assert_eq!(well_stocked.len(), 2);
//!
//! let avg = manage_inventory_with(&well_stocked, calculate_average_price).unwrap();
//! assert_eq!(avg, 15.0);
//! ```

pub mod average;
pub mod dispatch;
pub mod filter;
pub mod total;

pub use average::calculate_average_price;
pub use dispatch::{manage_inventory, manage_inventory_with, Computation, ComputationOutput};
pub use filter::filter_products_by_stock;
pub use total::calculate_total_value;
