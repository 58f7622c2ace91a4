//! Random-forest artifact evaluation.
//!
//! The trainer runs offline and exports the fitted forest as JSON:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "trained_at": "2026-07-14T09:30:00Z",
//!   "feature_count": 13,
//!   "n_classes": 4,
//!   "trees": [
//!     { "nodes": [
//!       { "kind": "split", "feature": 2, "threshold": 99.5, "left": 1, "right": 2 },
//!       { "kind": "leaf", "probabilities": [0.9, 0.1, 0.0, 0.0] },
//!       { "kind": "leaf", "probabilities": [0.1, 0.2, 0.3, 0.4] }
//!     ] }
//!   ]
//! }
//! ```
//!
//! Trees are flat arenas with the root at index 0 and children stored
//! after their parent, which makes cycles unrepresentable once validated.
//! Splits route left when `feature <= threshold`, matching the trainer's
//! convention, and the forest's class distribution is the mean of the
//! per-tree leaf distributions. All structural checks happen at load
//! time so prediction never panics on a malformed artifact.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::FEATURE_COUNT;

use super::types::DiagnosticModel;
use super::ArtifactError;

/// Artifact format revision for the forest file.
pub const FOREST_SCHEMA_VERSION: u32 = 1;

/// One node of a decision tree in its flat arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Route left when `features[feature] <= threshold`, right otherwise.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal class distribution.
    Leaf { probabilities: Vec<f64> },
}

/// A single decision tree. Structure is only trusted after
/// [`ForestModel`] validation, so traversal stays defensive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        DecisionTree { nodes }
    }

    /// Walk from the root to a leaf and return its distribution.
    fn proba(&self, features: &[f64; FEATURE_COUNT]) -> &[f64] {
        let mut index = 0;
        while let Some(node) = self.nodes.get(index) {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { probabilities } => return probabilities,
            }
        }
        &[]
    }

    fn validate(&self, index_in_forest: usize, n_classes: usize) -> Result<(), ArtifactError> {
        if self.nodes.is_empty() {
            return Err(ArtifactError::Malformed(format!(
                "tree {index_in_forest} has no nodes"
            )));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(ArtifactError::Malformed(format!(
                            "tree {index_in_forest} node {i} splits on feature {feature}, \
                             only {FEATURE_COUNT} exist"
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(ArtifactError::Malformed(format!(
                                "tree {index_in_forest} node {i} points at node {child}, \
                                 children must follow their parent"
                            )));
                        }
                    }
                }
                TreeNode::Leaf { probabilities } => {
                    if probabilities.len() != n_classes {
                        return Err(ArtifactError::Malformed(format!(
                            "tree {index_in_forest} node {i} carries {} probabilities, \
                             expected {n_classes}",
                            probabilities.len()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// An exported random forest plus the metadata needed to refuse
/// artifacts this build cannot evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trained_at: Option<DateTime<Utc>>,
    feature_count: usize,
    n_classes: usize,
    trees: Vec<DecisionTree>,
}

impl ForestModel {
    /// Assemble a forest from trees, validating structure up front.
    pub fn new(trees: Vec<DecisionTree>, n_classes: usize) -> Result<Self, ArtifactError> {
        let model = ForestModel {
            schema_version: FOREST_SCHEMA_VERSION,
            trained_at: None,
            feature_count: FEATURE_COUNT,
            n_classes,
            trees,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn trained_at(&self) -> Option<DateTime<Utc>> {
        self.trained_at
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let file = File::open(path)?;
        let model: ForestModel = serde_json::from_reader(BufReader::new(file))?;
        if model.schema_version != FOREST_SCHEMA_VERSION {
            return Err(ArtifactError::SchemaVersion {
                found: model.schema_version,
                expected: FOREST_SCHEMA_VERSION,
            });
        }
        if model.feature_count != FEATURE_COUNT {
            return Err(ArtifactError::FeatureCount {
                found: model.feature_count,
                expected: FEATURE_COUNT,
            });
        }
        model.validate()?;
        tracing::info!(
            trees = model.trees.len(),
            classes = model.n_classes,
            "Loaded forest artifact"
        );
        Ok(model)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        if self.n_classes == 0 {
            return Err(ArtifactError::Malformed("artifact declares zero classes".into()));
        }
        if self.trees.is_empty() {
            return Err(ArtifactError::Malformed("artifact contains no trees".into()));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            tree.validate(t, self.n_classes)?;
        }
        Ok(())
    }
}

impl DiagnosticModel for ForestModel {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        let mut sums = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (sum, p) in sums.iter_mut().zip(tree.proba(features)) {
                *sum += p;
            }
        }
        let count = self.trees.len() as f64;
        for sum in &mut sums {
            *sum /= count;
        }
        sums
    }
}
