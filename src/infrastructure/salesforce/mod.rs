pub mod client;
pub mod types;

pub use client::{SalesforceClient, DEFAULT_CONVERTED_STATUS};
