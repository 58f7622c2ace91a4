pub mod inputs;
pub mod record;

pub use inputs::{EcgInputs, FEATURE_COUNT};
pub use record::{ClinicalRecord, Sex, DIAGNOSIS_SEPARATOR};
