pub mod config;
pub mod lead;
pub mod outcome;

pub use config::{Config, ConversionConfig, DatabaseConfig, LoggingConfig, SalesforceConfig};
pub use lead::{ConversionErrorRecord, PendingLead};
pub use outcome::ConversionOutcome;
