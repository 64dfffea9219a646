use thiserror::Error;

/// Convenience result type for inventory computations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Error type returned by inventory computations.
///
/// This is a single error enum shared by the computations, the named-computation layer and
/// configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// An aggregation divided by the number of products, but the collection was empty.
    #[error("division by zero in {operation}: product collection is empty")]
    DivisionByZero { operation: &'static str },

    /// A named computation could not be invoked with the supplied arguments
    /// (unknown name, wrong number of arguments, unparseable argument).
    #[error("cannot invoke computation '{computation}': {message}")]
    Invocation { computation: String, message: String },

    /// A configuration value could not be parsed.
    #[error("invalid configuration value for {key}: {message}")]
    Config { key: String, message: String },
}
