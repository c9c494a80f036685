pub mod error;
pub mod record;
pub mod summary;

pub use error::{LeadError, Result};
pub use record::{LEAD_COLUMNS, LeadRecord};
pub use summary::CleanSummary;
