//! The classified outcome of one conversion attempt.

use serde::{Deserialize, Serialize};

/// What happened to a single lead, after classification.
///
/// Derived per item inside a run and never persisted: `Success` drives a
/// dequeue, `Failure` drives an error-sink insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConversionOutcome {
    Success {
        account_id: String,
        contact_id: String,
        /// Absent when the run is configured not to create opportunities.
        opportunity_id: Option<String>,
    },
    Failure {
        reason: String,
    },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
