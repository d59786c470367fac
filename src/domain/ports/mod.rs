pub mod conversion_queue;
pub mod crm_client;

pub use conversion_queue::ConversionQueue;
pub use crm_client::{ConvertLeadError, ConvertLeadResult, CrmClient};
