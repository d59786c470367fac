use crate::domain::errors::QueueError;
use crate::domain::models::{ConversionErrorRecord, PendingLead};
use async_trait::async_trait;

/// Port for the durable conversion queue and its error sink.
///
/// Both mutations commit individually before the caller moves on to the next
/// item; the loop relies on that to keep each record's fate durable under a
/// mid-run crash.
#[async_trait]
pub trait ConversionQueue: Send + Sync {
    /// Snapshot read of every pending lead, in enqueue order.
    async fn fetch_pending(&self) -> Result<Vec<PendingLead>, QueueError>;

    /// Remove a lead from the pending queue. Idempotent: deleting a key that
    /// no longer exists is not an error.
    async fn delete_pending(&self, lead_id: &str) -> Result<(), QueueError>;

    /// Append a failed attempt to the error sink. No dedup key; the same
    /// lead may accumulate rows across runs.
    async fn insert_error(&self, record: &ConversionErrorRecord) -> Result<(), QueueError>;
}
