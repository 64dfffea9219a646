//! Observed dispatch of named computations.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - A [`Dispatcher`] that runs a [`Computation`] through [`Computation::apply`]
//! - Observer hooks for logging dispatch lifecycle events
//! - Running counters for monitoring
//!
//! Results are exactly what [`Computation::apply`] returns; observation never alters them.

mod observer;

use std::sync::Arc;
use std::time::Instant;

use crate::error::InventoryResult;
use crate::processing::{Computation, ComputationOutput};
use crate::types::ProductCollection;

pub use observer::{DispatchEvent, DispatchMetrics, DispatchMetricsSnapshot, DispatchObserver, StdErrObserver};

/// Runs named computations and reports each run to an optional observer.
#[derive(Default)]
pub struct Dispatcher {
    observer: Option<Arc<dyn DispatchObserver>>,
    metrics: Arc<DispatchMetrics>,
}

impl Dispatcher {
    /// Create a dispatcher without an observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer for dispatch events.
    pub fn with_observer(mut self, observer: Arc<dyn DispatchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to the running dispatch counters.
    pub fn metrics(&self) -> Arc<DispatchMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Apply `computation` to `products`, emitting `Started` and then `Finished` or `Failed`.
    pub fn run(
        &self,
        products: &ProductCollection,
        computation: &Computation,
    ) -> InventoryResult<ComputationOutput> {
        let start = Instant::now();
        self.metrics.on_start(products.len());
        self.emit(DispatchEvent::Started {
            computation: *computation,
            input_len: products.len(),
        });

        let out = computation.apply(products);

        match &out {
            Ok(output) => self.emit(DispatchEvent::Finished {
                computation: *computation,
                elapsed: start.elapsed(),
                output: output.clone(),
            }),
            Err(e) => {
                self.metrics.on_failure();
                self.emit(DispatchEvent::Failed {
                    computation: *computation,
                    message: e.to_string(),
                });
            }
        }
        out
    }

    fn emit(&self, event: DispatchEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
