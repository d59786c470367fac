//! The reconciliation loop: one pass over the pending queue.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::domain::errors::{CrmError, QueueError};
use crate::domain::models::{ConversionErrorRecord, ConversionOutcome, PendingLead};
use crate::domain::ports::{ConversionQueue, CrmClient};
use crate::services::classifier::classify;

/// Run-level failures. Per-item failures never surface here; they end up in
/// the error sink or in `RunSummary::unresolved`.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to read pending queue: {0}")]
    Snapshot(#[from] QueueError),

    #[error("converted-status resolution failed: {0}")]
    StatusResolution(#[from] CrmError),
}

/// Counts for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Records in the snapshot.
    pub pending: usize,
    /// Converted and removed from the queue.
    pub converted: usize,
    /// Moved to the error sink.
    pub failed: usize,
    /// Left in place by a store-mutation fault; picked up by the next run.
    pub unresolved: usize,
}

/// One-shot reconciler over a snapshot of the pending queue.
///
/// Strictly sequential per item: each record's fate is durably resolved
/// before the next conversion starts. The converted-status label is resolved
/// once per run and shared across every item.
pub struct Reconciler {
    queue: Arc<dyn ConversionQueue>,
    crm: Arc<dyn CrmClient>,
    create_opportunity: bool,
}

impl Reconciler {
    pub fn new(
        queue: Arc<dyn ConversionQueue>,
        crm: Arc<dyn CrmClient>,
        create_opportunity: bool,
    ) -> Self {
        Self {
            queue,
            crm,
            create_opportunity,
        }
    }

    /// Execute one reconciliation pass.
    ///
    /// Returns `Err` only for run-level faults (snapshot read, status
    /// resolution); in that case no partial processing has happened beyond
    /// items already durably resolved.
    pub async fn run(&self) -> Result<RunSummary, RunError> {
        let run_id = Uuid::new_v4();
        let span = info_span!("reconciliation_run", %run_id);
        self.run_inner().instrument(span).await
    }

    async fn run_inner(&self) -> Result<RunSummary, RunError> {
        let pending = self.queue.fetch_pending().await?;
        if pending.is_empty() {
            info!("no pending leads");
            return Ok(RunSummary::default());
        }

        info!(count = pending.len(), "fetched pending leads");

        // One remote round-trip for the whole run; the label is run-invariant.
        let converted_status = self.crm.resolve_converted_status().await?;

        let mut summary = RunSummary {
            pending: pending.len(),
            ..RunSummary::default()
        };

        for lead in &pending {
            self.process_lead(lead, &converted_status, &mut summary)
                .await;
        }

        info!(
            pending = summary.pending,
            converted = summary.converted,
            failed = summary.failed,
            unresolved = summary.unresolved,
            "run complete"
        );

        Ok(summary)
    }

    /// Resolve one record's fate. Every path ends in a summary bucket; a
    /// store-mutation fault leaves the record pending for the next run
    /// instead of aborting this one.
    async fn process_lead(
        &self,
        lead: &PendingLead,
        converted_status: &str,
        summary: &mut RunSummary,
    ) {
        let result = self
            .crm
            .convert_lead(&lead.lead_id, converted_status, self.create_opportunity)
            .await;

        match classify(result) {
            ConversionOutcome::Success {
                account_id,
                contact_id,
                opportunity_id,
            } => {
                info!(
                    lead_id = %lead.lead_id,
                    %account_id,
                    %contact_id,
                    ?opportunity_id,
                    "lead converted"
                );
                match self.queue.delete_pending(&lead.lead_id).await {
                    Ok(()) => summary.converted += 1,
                    Err(err) => {
                        error!(lead_id = %lead.lead_id, %err, "failed to dequeue converted lead");
                        summary.unresolved += 1;
                    }
                }
            }
            ConversionOutcome::Failure { reason } => {
                warn!(lead_id = %lead.lead_id, %reason, "lead conversion failed");
                let record = ConversionErrorRecord::from_lead(lead, reason, Utc::now());

                // Error row first, then dequeue: a fault between the two can
                // duplicate the record across sinks but never lose it.
                if let Err(err) = self.queue.insert_error(&record).await {
                    error!(lead_id = %lead.lead_id, %err, "failed to record conversion error");
                    summary.unresolved += 1;
                    return;
                }
                match self.queue.delete_pending(&lead.lead_id).await {
                    Ok(()) => summary.failed += 1,
                    Err(err) => {
                        error!(lead_id = %lead.lead_id, %err, "failed to dequeue failed lead");
                        summary.unresolved += 1;
                    }
                }
            }
        }
    }
}
