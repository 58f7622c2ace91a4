/// Application-level constants
pub const APP_NAME: &str = "Cardia";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default path of the dataset CSV written by ingestion.
pub const DEFAULT_DATASET_FILE: &str = "ecg_data.csv";

/// Default path of the exported forest artifact.
pub const DEFAULT_MODEL_FILE: &str = "model.json";

/// Default path of the label codec artifact.
pub const DEFAULT_CODEC_FILE: &str = "labels.json";

/// Tracing filter used when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}
