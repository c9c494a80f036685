//! Lead-field normalizers and the row-wise cleaning pipeline.
//!
//! Every normalizer is a total function over optional string input: it
//! returns the canonical value or `None`, and never propagates an error.
//! Only the phone result gates row retention.

pub mod date;
pub mod email;
pub mod fields;
pub mod phone;
pub mod pipeline;

pub use date::clean_date;
pub use email::{KNOWN_DOMAINS, KNOWN_TLDS, correct_domain, normalize_email};
pub use fields::{UNKNOWN_SOURCE, clean_age, clean_gender, clean_name, clean_source};
pub use phone::{VALID_DDD, normalize_phone};
pub use pipeline::{CleanOutcome, clean_dataset, clean_record};
