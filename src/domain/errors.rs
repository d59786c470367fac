//! Domain errors for the lead-conversion reconciler.

use thiserror::Error;

/// Errors raised by the conversion queue store.
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("query failed: {0}")]
    QueryFailed(#[from] sqlx::Error),

    #[error("datetime parse error: {0}")]
    DateTimeParse(#[from] chrono::ParseError),
}

/// Errors raised by the remote CRM client.
///
/// `Auth` and `Api` carry the remote response body so a run-level failure is
/// diagnosable from the log stream alone. `Transport` renders as the bare
/// underlying message: the classifier persists it verbatim as the failure
/// reason for the affected lead.
#[derive(Debug, Error)]
pub enum CrmError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("{0}")]
    Transport(String),

    #[error("Salesforce API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("unexpected response shape: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for CrmError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
