//! Core data model types.
//!
//! Computations operate on an in-memory [`ProductCollection`], an ordered list of
//! [`Product`] records.

use serde::{Deserialize, Serialize};

/// A single product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name. Not required to be unique.
    pub name: String,
    /// Unit price (non-negative, currency-agnostic).
    pub price: f64,
    /// Quantity on hand.
    pub stock: u32,
}

impl Product {
    /// Create a new product.
    pub fn new(name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }

    /// `price * stock` for this product.
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }
}

/// Ordered, in-memory collection of products.
///
/// Insertion order is preserved by filtering. No computation mutates a collection; derived
/// collections are returned as new values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCollection {
    /// Products in insertion order.
    pub products: Vec<Product>,
}

impl ProductCollection {
    /// Create a collection from products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Number of products in the collection.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the collection holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate products in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Create a new collection containing only products that match `predicate`.
    ///
    /// Relative order of the kept products is unchanged.
    pub fn filter_products<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Product) -> bool,
    {
        let products = self
            .products
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect();
        Self { products }
    }

    /// Reduce (fold) all products into an accumulator value.
    ///
    /// This is similar to `Iterator::fold`, but provides each product by reference.
    pub fn reduce_products<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &Product) -> A,
    {
        self.products.iter().fold(init, |acc, p| reducer(acc, p))
    }
}

impl From<Vec<Product>> for ProductCollection {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl FromIterator<Product> for ProductCollection {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ProductCollection {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
