use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::FEATURE_COUNT;

use super::ArtifactError;

/// Artifact format revision for the label codec file.
pub const CODEC_SCHEMA_VERSION: u32 = 1;

/// A classifier over the fixed ECG feature vector.
///
/// Implemented by [`super::ForestModel`] for exported artifacts and by
/// test stubs where the triage logic needs a controllable prediction.
pub trait DiagnosticModel {
    /// Per-class probabilities, aligned with the label codec's class order.
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Vec<f64>;

    /// Index of the most likely class. Ties resolve to the lowest index.
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> usize {
        argmax(&self.predict_proba(features))
    }
}

/// Index of the largest value; first occurrence wins, empty slices map to 0.
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}

/// Bidirectional mapping between diagnosis strings and the class indices
/// the model was trained against. Class order is the sorted set of unique
/// labels seen at preparation time, so encoder and artifact stay aligned
/// as long as they were produced from the same dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelCodec {
    schema_version: u32,
    classes: Vec<String>,
}

impl LabelCodec {
    /// Build a codec from raw labels: unique, sorted.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: std::collections::BTreeSet<String> =
            labels.into_iter().map(Into::into).collect();
        LabelCodec {
            schema_version: CODEC_SCHEMA_VERSION,
            classes: classes.into_iter().collect(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Diagnosis string for a class index, if the index is in range.
    pub fn decode(&self, class_index: usize) -> Option<&str> {
        self.classes.get(class_index).map(String::as_str)
    }

    /// Class index for a diagnosis string, if the codec knows it.
    pub fn encode(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let file = File::open(path)?;
        let codec: LabelCodec = serde_json::from_reader(BufReader::new(file))?;
        if codec.schema_version != CODEC_SCHEMA_VERSION {
            return Err(ArtifactError::SchemaVersion {
                found: codec.schema_version,
                expected: CODEC_SCHEMA_VERSION,
            });
        }
        Ok(codec)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn from_labels_sorts_and_dedupes() {
        let codec = LabelCodec::from_labels(["Sinus Rhythm", "Atrial Fibrillation", "Sinus Rhythm"]);
        assert_eq!(codec.classes(), ["Atrial Fibrillation", "Sinus Rhythm"]);
        assert_eq!(codec.len(), 2);
    }

    #[test]
    fn decode_and_encode_are_inverse_on_known_labels() {
        let codec = LabelCodec::from_labels(["B", "A", "C"]);
        for (i, class) in codec.classes().iter().enumerate() {
            assert_eq!(codec.encode(class), Some(i));
            assert_eq!(codec.decode(i), Some(class.as_str()));
        }
    }

    #[test]
    fn out_of_range_index_and_unknown_label_are_none() {
        let codec = LabelCodec::from_labels(["A"]);
        assert_eq!(codec.decode(7), None);
        assert_eq!(codec.encode("Z"), None);
    }

    #[test]
    fn codec_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("labels.json");
        let codec = LabelCodec::from_labels(["Sinus Rhythm", "Sinus Tachycardia"]);
        codec.save(&path).unwrap();
        assert_eq!(LabelCodec::load(&path).unwrap(), codec);
    }

    #[test]
    fn load_rejects_future_schema_versions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("labels.json");
        std::fs::write(&path, r#"{"schema_version": 99, "classes": ["A"]}"#).unwrap();
        assert!(matches!(
            LabelCodec::load(&path),
            Err(ArtifactError::SchemaVersion { found: 99, expected: CODEC_SCHEMA_VERSION })
        ));
    }

    // ── argmax ──

    #[test]
    fn argmax_picks_first_of_tied_maxima() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), 1);
    }

    #[test]
    fn argmax_of_empty_slice_is_zero() {
        assert_eq!(argmax(&[]), 0);
    }
}
