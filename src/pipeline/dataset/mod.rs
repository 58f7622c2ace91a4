//! Dataset assembly, persistence and training preparation.

pub mod assemble;
pub mod prepare;
pub mod store;

pub use assemble::Dataset;
pub use prepare::{prepare_training_data, write_matrix_csv, PreparedDataset, FEATURE_NAMES};
pub use store::{read_csv, write_csv};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
