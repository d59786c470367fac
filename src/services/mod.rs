//! Service layer: outcome classification and the reconciliation loop.

pub mod classifier;
pub mod reconciler;

pub use classifier::classify;
pub use reconciler::{Reconciler, RunError, RunSummary};
