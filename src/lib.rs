//! `inventory-calculator` computes simple aggregate statistics and filters over an in-memory
//! [`types::ProductCollection`].
//!
//! The primary entrypoint is [`processing::manage_inventory`], a higher-order dispatcher that
//! applies any computation (plus extra arguments) to a product collection and returns its result
//! unchanged.
//!
//! ## Built-in computations
//!
//! - [`processing::calculate_average_price`]: mean price; an empty collection is an
//!   [`InventoryError::DivisionByZero`]
//! - [`processing::calculate_total_value`]: sum of `price * stock`; `0.0` when empty
//! - [`processing::filter_products_by_stock`]: products with `stock >= min_stock`, in order
//!
//! ## Quick example
//!
//! ```rust
//! use inventory_calculator::processing::{
//!     calculate_average_price, calculate_total_value, filter_products_by_stock, manage_inventory,
//!     manage_inventory_with,
//! };
//! use inventory_calculator::types::{Product, ProductCollection};
//!
//! # fn main() -> Result<(), inventory_calculator::InventoryError> {
//! let products = ProductCollection::new(vec![
//!     Product::new("Product 1", 100.0, 1),
//!     Product::new("Product 2", 200.0, 2),
//!     Product::new("Product 3", 300.0, 3),
//! ]);
//!
//! assert_eq!(manage_inventory_with(&products, calculate_average_price)?, 200.0);
//! assert_eq!(manage_inventory_with(&products, calculate_total_value), 1400.0);
//!
//! let filtered = manage_inventory(&products, filter_products_by_stock, 2);
//! assert_eq!(filtered.len(), 2);
//!
//! // Any closure works as a computation.
//! let sum_price = manage_inventory_with(&products, |p| p.iter().map(|p| p.price).sum::<f64>());
//! assert_eq!(sum_price, 600.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Named computations
//!
//! [`processing::Computation`] selects a built-in computation by name and string arguments
//! (this is what the `inventory-calculator` binary uses). Unknown names and argument mismatches
//! are reported as [`InventoryError::Invocation`]. [`execution::Dispatcher`] runs a named
//! computation and reports it to an optional [`execution::DispatchObserver`].
//!
//! ## Modules
//!
//! - [`types`]: product and collection types
//! - [`processing`]: the computations and the dispatcher
//! - [`execution`]: observed dispatch with logging hooks and counters
//! - [`report`]: demonstration report and its options
//! - [`error`]: error types

pub mod error;
pub mod execution;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{InventoryError, InventoryResult};
