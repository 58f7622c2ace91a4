//! Statistical model boundary.
//!
//! Training happens outside this crate; what ships here is the contract:
//! the [`DiagnosticModel`] trait the triage layer consumes, the
//! [`LabelCodec`] that maps class indices back to diagnosis strings, and
//! a [`ForestModel`] that evaluates an exported random-forest artifact.

pub mod forest;
pub mod types;

pub use forest::{DecisionTree, ForestModel, TreeNode, FOREST_SCHEMA_VERSION};
pub use types::{DiagnosticModel, LabelCodec, CODEC_SCHEMA_VERSION};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported artifact schema version {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },

    #[error("Artifact expects {found} features, this build uses {expected}")]
    FeatureCount { found: usize, expected: usize },

    #[error("Malformed artifact: {0}")]
    Malformed(String),
}
