//! Demonstration report over a fixed sample inventory.
//!
//! [`render_demo`] produces the lines printed by the `inventory-calculator` binary. Options come
//! from [`ReportOptions`], which can be overridden through environment variables via
//! [`ReportOptions::from_env`].

use std::sync::Arc;

use crate::error::{InventoryError, InventoryResult};
use crate::execution::{Dispatcher, StdErrObserver};
use crate::processing::{Computation, ComputationOutput};
use crate::types::{Product, ProductCollection};

/// Environment variable overriding [`ReportOptions::currency_symbol`].
pub const ENV_CURRENCY: &str = "INVENTORY_CURRENCY";
/// Environment variable overriding [`ReportOptions::min_stock`].
pub const ENV_MIN_STOCK: &str = "INVENTORY_MIN_STOCK";
/// Environment variable enabling [`ReportOptions::observe`] when non-empty.
pub const ENV_LOG: &str = "INVENTORY_LOG";

/// Options controlling the demonstration report.
///
/// Use [`Default`] for common cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Appended to every monetary value.
    pub currency_symbol: String,
    /// Threshold used for the stock filter step.
    pub min_stock: i64,
    /// If `true`, dispatch events are logged to stderr.
    pub observe: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            min_stock: 20,
            observe: false,
        }
    }
}

impl ReportOptions {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> InventoryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> InventoryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(symbol) = lookup(ENV_CURRENCY) {
            opts.currency_symbol = symbol;
        }
        if let Some(raw) = lookup(ENV_MIN_STOCK) {
            opts.min_stock = raw.trim().parse::<i64>().map_err(|e| InventoryError::Config {
                key: ENV_MIN_STOCK.to_string(),
                message: format!("{e} (raw='{raw}')"),
            })?;
        }
        if let Some(flag) = lookup(ENV_LOG) {
            opts.observe = !flag.trim().is_empty();
        }

        Ok(opts)
    }

    /// Build a [`Dispatcher`], with a stderr observer attached when `observe` is set.
    pub fn dispatcher(&self) -> Dispatcher {
        if self.observe {
            Dispatcher::new().with_observer(Arc::new(StdErrObserver))
        } else {
            Dispatcher::new()
        }
    }
}

/// The fixed twenty-product inventory used by the demonstration.
pub fn sample_products() -> ProductCollection {
    [
        ("Laptop", 800.0, 5),
        ("Smartphone", 500.0, 10),
        ("Headphones", 50.0, 20),
        ("Keyboard", 20.0, 30),
        ("Monitor", 150.0, 15),
        ("Mouse", 10.0, 40),
        ("Printer", 200.0, 10),
        ("Tablet", 300.0, 12),
        ("Desk Chair", 100.0, 7),
        ("USB Drive", 5.0, 100),
        ("External Hard Drive", 80.0, 20),
        ("Microphone", 40.0, 25),
        ("Webcam", 30.0, 15),
        ("Projector", 400.0, 8),
        ("Speaker", 35.0, 30),
        ("Smartwatch", 150.0, 14),
        ("Phone Charger", 10.0, 50),
        ("Laptop Bag", 25.0, 30),
        ("HDMI Cable", 10.0, 40),
        ("WiFi Router", 60.0, 12),
    ]
    .into_iter()
    .map(|(name, price, stock)| Product::new(name, price, stock))
    .collect()
}

/// Render the demonstration report for `products`.
///
/// Lines, in order: average price, total value, a header naming the stock threshold followed by
/// one JSON object per matching product, and the average price of the matching products.
pub fn render_demo(products: &ProductCollection, opts: &ReportOptions) -> InventoryResult<Vec<String>> {
    let dispatcher = opts.dispatcher();
    let currency = &opts.currency_symbol;
    let mut lines = Vec::new();

    let average = number(dispatcher.run(products, &Computation::AveragePrice)?);
    lines.push(format!("Average price of products: {average:.2}{currency}"));

    let total = number(dispatcher.run(products, &Computation::TotalValue)?);
    lines.push(format!("Total value of products: {total}{currency}"));

    let filter = Computation::FilterByStock {
        min_stock: opts.min_stock,
    };
    let filtered = products_of(dispatcher.run(products, &filter)?);
    lines.push(format!(
        "Products with a stock of at least {}:",
        opts.min_stock
    ));
    for product in &filtered {
        lines.push(product_line(product));
    }

    let filtered_average = number(dispatcher.run(&filtered, &Computation::AveragePrice)?);
    lines.push(format!(
        "Average price of products where min_stock={}: {filtered_average:.2}{currency}",
        opts.min_stock
    ));

    Ok(lines)
}

/// Render the output of a single named computation.
pub fn render_output(output: &ComputationOutput, opts: &ReportOptions) -> Vec<String> {
    match output {
        ComputationOutput::Number(v) => vec![format!("{v}{}", opts.currency_symbol)],
        ComputationOutput::Products(products) => products.iter().map(product_line).collect(),
    }
}

fn product_line(product: &Product) -> String {
    serde_json::to_string(product).unwrap_or_else(|_| format!("{product:?}"))
}

// Fixed computations always map to the same output variant.
fn number(output: ComputationOutput) -> f64 {
    output.as_number().unwrap_or(f64::NAN)
}

fn products_of(output: ComputationOutput) -> ProductCollection {
    output.into_products().unwrap_or_default()
}
