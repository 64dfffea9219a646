use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::processing::{Computation, ComputationOutput};

/// Dispatch events emitted by the [`super::Dispatcher`].
#[derive(Debug, Clone)]
pub enum DispatchEvent {
    Started {
        computation: Computation,
        input_len: usize,
    },
    Finished {
        computation: Computation,
        elapsed: Duration,
        output: ComputationOutput,
    },
    Failed {
        computation: Computation,
        message: String,
    },
}

/// Observer hook for dispatch events.
pub trait DispatchObserver: Send + Sync {
    fn on_event(&self, event: &DispatchEvent);
}

/// Logs dispatch events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl DispatchObserver for StdErrObserver {
    fn on_event(&self, event: &DispatchEvent) {
        match event {
            DispatchEvent::Started {
                computation,
                input_len,
            } => eprintln!("[dispatch][start] computation={computation} products={input_len}"),
            DispatchEvent::Finished {
                computation,
                elapsed,
                output,
            } => match output {
                ComputationOutput::Number(v) => {
                    eprintln!("[dispatch][ok] computation={computation} result={v} elapsed={elapsed:?}")
                }
                ComputationOutput::Products(p) => eprintln!(
                    "[dispatch][ok] computation={computation} products={} elapsed={elapsed:?}",
                    p.len()
                ),
            },
            DispatchEvent::Failed {
                computation,
                message,
            } => eprintln!("[dispatch][fail] computation={computation} err={message}"),
        }
    }
}

/// Running counters across every dispatch made by one [`super::Dispatcher`].
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    runs_started: AtomicU64,
    runs_failed: AtomicU64,
    products_processed: AtomicU64,
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start(&self, input_len: usize) {
        let _ = self.runs_started.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .products_processed
            .fetch_add(input_len as u64, Ordering::SeqCst);
    }

    pub fn on_failure(&self) {
        let _ = self.runs_failed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> DispatchMetricsSnapshot {
        DispatchMetricsSnapshot {
            runs_started: self.runs_started.load(Ordering::SeqCst),
            runs_failed: self.runs_failed.load(Ordering::SeqCst),
            products_processed: self.products_processed.load(Ordering::SeqCst),
        }
    }
}

/// Immutable snapshot of [`DispatchMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchMetricsSnapshot {
    pub runs_started: u64,
    pub runs_failed: u64,
    pub products_processed: u64,
}

impl fmt::Display for DispatchMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "runs_started={}, runs_failed={}, products_processed={}",
            self.runs_started, self.runs_failed, self.products_processed
        )
    }
}
