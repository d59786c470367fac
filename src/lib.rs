//! Leadconvert - Salesforce lead-conversion queue reconciler
//!
//! A batch job that drains a durable queue of leads awaiting conversion:
//! each pending lead is converted through the Salesforce API, then either
//! removed from the queue (success) or moved to a durable error sink with
//! the failure reason. A record is never silently lost: it ends up
//! converted-and-removed, logged-with-reason, or (only under a store fault)
//! untouched for the next scheduled run.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): records, outcome model, and ports
//! - **Service Layer** (`services`): the classifier and the reconciliation loop
//! - **Infrastructure Layer** (`infrastructure`): sqlx queue store, Salesforce
//!   client, configuration, credentials, logging
//! - **CLI Layer** (`cli`): the `run`/`status`/`check` commands

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{CrmError, QueueError};
pub use domain::models::{
    Config, ConversionErrorRecord, ConversionOutcome, DatabaseConfig, LoggingConfig, PendingLead,
    SalesforceConfig,
};
pub use domain::ports::{ConversionQueue, ConvertLeadResult, CrmClient};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{classify, Reconciler, RunError, RunSummary};
