//! CSV ingestion and output for lead datasets.

pub mod csv_table;

pub use csv_table::{read_leads, write_leads};
