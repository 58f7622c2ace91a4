//! Regex-driven field extraction from raw ECG report text.
//!
//! One page of report text goes in, a [`crate::models::ClinicalRecord`]
//! comes out. Extraction is total: it cannot fail, it can only leave
//! fields unfilled.

pub mod probes;
pub mod report;

pub use report::extract_record;
