//! Pure outcome classification for conversion results.

use crate::domain::errors::CrmError;
use crate::domain::models::ConversionOutcome;
use crate::domain::ports::ConvertLeadResult;

/// Reason persisted when the remote response fits no known shape.
pub const UNRECOGNIZED_RESPONSE: &str = "unrecognized response shape";

/// Classify one conversion attempt into its terminal outcome.
///
/// Every input maps to an outcome; nothing propagates out of here. A success
/// flag without the promised identifiers, or a failure without error detail,
/// is a malformed response and classified as a failure rather than a fault.
pub fn classify(result: Result<ConvertLeadResult, CrmError>) -> ConversionOutcome {
    match result {
        Ok(result) => classify_result(result),
        Err(err) => ConversionOutcome::Failure {
            reason: err.to_string(),
        },
    }
}

fn classify_result(result: ConvertLeadResult) -> ConversionOutcome {
    if result.success {
        match (result.account_id, result.contact_id) {
            (Some(account_id), Some(contact_id)) => ConversionOutcome::Success {
                account_id,
                contact_id,
                opportunity_id: result.opportunity_id,
            },
            _ => ConversionOutcome::Failure {
                reason: UNRECOGNIZED_RESPONSE.to_string(),
            },
        }
    } else if result.errors.is_empty() {
        ConversionOutcome::Failure {
            reason: UNRECOGNIZED_RESPONSE.to_string(),
        }
    } else {
        ConversionOutcome::Failure {
            reason: result
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}
