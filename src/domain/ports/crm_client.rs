use crate::domain::errors::CrmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Raw result of one remote conversion call, before classification.
///
/// A business-rule rejection (lead already converted, invalid status, ...)
/// arrives here with `success == false` and the remote's error entries; it is
/// not an `Err` at the port boundary. Only transport and auth faults are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertLeadResult {
    pub success: bool,
    pub account_id: Option<String>,
    pub contact_id: Option<String>,
    pub opportunity_id: Option<String>,
    #[serde(default)]
    pub errors: Vec<ConvertLeadError>,
}

/// One error entry returned by the remote conversion operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertLeadError {
    pub message: String,
}

/// Port for the remote CRM's conversion operation and status metadata.
#[async_trait]
pub trait CrmClient: Send + Sync {
    /// Resolve the display label of the lead status flagged as is-converted.
    ///
    /// Called once per run; the label is run-invariant. Implementations fall
    /// back to a fixed label when the remote yields no such status. An `Err`
    /// here is fatal to the run, not per-item.
    async fn resolve_converted_status(&self) -> Result<String, CrmError>;

    /// Convert exactly one lead. The side effect lives entirely on the
    /// remote system (Account/Contact and optionally Opportunity creation).
    async fn convert_lead(
        &self,
        lead_id: &str,
        converted_status: &str,
        create_opportunity: bool,
    ) -> Result<ConvertLeadResult, CrmError>;
}
