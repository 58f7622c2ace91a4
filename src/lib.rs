//! Cardia: ECG report triage.
//!
//! The pipeline runs in two halves. Offline, raw report text is split
//! into pages, probed for clinical fields and assembled into a dataset
//! CSV that an external trainer consumes. Online, the exported model
//! artifact scores a feature vector and the triage layer fuses that
//! prediction with hard clinical rules into a patient-facing assessment.

pub mod config;
pub mod models;
pub mod pipeline;
pub mod triage; // overrides + label hygiene + fusion + risk banding

use tracing_subscriber::EnvFilter;

/// Initialize structured logging. `RUST_LOG` wins when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
