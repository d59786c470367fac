//! Queue records: pending leads and the error-sink rows they become.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lead waiting to be converted, as read from the pending queue.
///
/// `lead_id` is the remote CRM's 18-character record id and is unique within
/// one snapshot. `client_id` and `created_date` are carried through to error
/// records only; the conversion call itself needs nothing but the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLead {
    pub lead_id: String,
    pub client_id: String,
    pub created_date: DateTime<Utc>,
}

/// One row in the error sink: a failed conversion attempt with its reason.
///
/// Created exactly once per failed item, never updated or deleted by this
/// system. The identifying fields are copied from the source record so the
/// pending row can be dropped without losing the trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionErrorRecord {
    pub lead_id: String,
    pub client_id: String,
    pub created_date: DateTime<Utc>,
    pub error_date: DateTime<Utc>,
    pub message: String,
}

impl ConversionErrorRecord {
    /// Build an error record for `lead`, observed failing at `error_date`.
    pub fn from_lead(
        lead: &PendingLead,
        message: impl Into<String>,
        error_date: DateTime<Utc>,
    ) -> Self {
        Self {
            lead_id: lead.lead_id.clone(),
            client_id: lead.client_id.clone(),
            created_date: lead.created_date,
            error_date,
            message: message.into(),
        }
    }
}
