//! Training preconditions.
//!
//! The trainer itself lives outside this crate, but everything it
//! assumes about its input is produced here: holes imputed (median for
//! numeric columns, most frequent value for sex), the primary diagnosis
//! isolated, and labels encoded against a sorted-unique codec. Rows with
//! no usable diagnosis are counted and left out of the matrix.

use std::path::Path;

use crate::models::{ClinicalRecord, Sex, FEATURE_COUNT};
use crate::pipeline::inference::LabelCodec;

use super::{Dataset, DatasetError};

/// Trainer-facing column names, matching [`EcgInputs::feature_vector`]
/// order.
///
/// [`EcgInputs::feature_vector`]: crate::models::EcgInputs::feature_vector
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age", "Gender", "HR", "P_ms", "PR_ms", "QRS_ms", "QT_ms", "QTc_ms", "P_axis", "QRS_axis",
    "T_axis", "RV5", "SV1",
];

/// Position of the sex column, the one column imputed by mode.
const SEX_FEATURE: usize = 1;

/// An imputed feature matrix with encoded labels, ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDataset {
    pub rows: Vec<[f64; FEATURE_COUNT]>,
    pub class_indices: Vec<usize>,
    pub codec: LabelCodec,
    /// Accepted records that carried no usable diagnosis.
    pub unlabeled: usize,
}

impl PreparedDataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Turn an assembled dataset into a training matrix.
///
/// Imputation statistics are computed over every accepted record, labeled
/// or not, so a sparsely labeled dataset still fills holes from the full
/// population.
pub fn prepare_training_data(dataset: &Dataset) -> PreparedDataset {
    let fills = imputation_fills(&dataset.records);

    let mut labels = Vec::new();
    let mut labeled = Vec::new();
    let mut unlabeled = 0;
    for record in &dataset.records {
        match record.primary_diagnosis() {
            Some(label) => {
                labels.push(label.to_string());
                labeled.push(record);
            }
            None => unlabeled += 1,
        }
    }

    let codec = LabelCodec::from_labels(labels.iter().cloned());
    let mut rows = Vec::with_capacity(labeled.len());
    let mut class_indices = Vec::with_capacity(labeled.len());
    for (record, label) in labeled.iter().zip(&labels) {
        rows.push(imputed_features(record, &fills));
        // Every label was fed to the codec, so encode cannot miss.
        if let Some(class) = codec.encode(label) {
            class_indices.push(class);
        }
    }

    tracing::info!(
        rows = rows.len(),
        classes = codec.len(),
        unlabeled,
        "Prepared training matrix"
    );
    PreparedDataset {
        rows,
        class_indices,
        codec,
        unlabeled,
    }
}

/// Export the matrix as CSV with a trailing `Class` column of codec
/// indices, one row per labeled record.
pub fn write_matrix_csv(prepared: &PreparedDataset, path: &Path) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut header: Vec<&str> = FEATURE_NAMES.to_vec();
    header.push("Class");
    writer.write_record(&header)?;
    for (row, class) in prepared.rows.iter().zip(&prepared.class_indices) {
        let mut cells: Vec<String> = row.iter().map(f64::to_string).collect();
        cells.push(class.to_string());
        writer.write_record(&cells)?;
    }
    writer.flush()?;
    tracing::info!(rows = prepared.len(), path = %path.display(), "Wrote training matrix");
    Ok(())
}

/// Per-column fill values: median everywhere except the sex column,
/// which uses the most frequent value. Columns with no data at all fall
/// back to zero.
fn imputation_fills(records: &[ClinicalRecord]) -> [f64; FEATURE_COUNT] {
    let mut fills = [0.0; FEATURE_COUNT];
    for (column, fill) in fills.iter_mut().enumerate() {
        if column == SEX_FEATURE {
            *fill = sex_mode(records);
        } else {
            let mut values: Vec<f64> = records
                .iter()
                .filter_map(|r| optional_features(r)[column])
                .collect();
            *fill = median(&mut values);
        }
    }
    fills
}

fn imputed_features(record: &ClinicalRecord, fills: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
    let mut features = [0.0; FEATURE_COUNT];
    for (column, (feature, fill)) in optional_features(record).into_iter().zip(fills).enumerate() {
        features[column] = feature.unwrap_or(*fill);
    }
    features
}

/// The record's features in trained column order, holes preserved.
fn optional_features(record: &ClinicalRecord) -> [Option<f64>; FEATURE_COUNT] {
    [
        record.age_years.map(f64::from),
        record.sex.map(Sex::encoded),
        record.heart_rate_bpm.map(f64::from),
        record.p_duration_ms.map(f64::from),
        record.pr_interval_ms.map(f64::from),
        record.qrs_duration_ms.map(f64::from),
        record.qt_interval_ms.map(f64::from),
        record.qtc_interval_ms.map(f64::from),
        record.p_axis_deg.map(f64::from),
        record.qrs_axis_deg.map(f64::from),
        record.t_axis_deg.map(f64::from),
        record.rv5_mv,
        record.sv1_mv,
    ]
}

/// Median with the usual midpoint rule for even counts; 0 when empty.
fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

/// Most frequent sex encoding; ties resolve to the lower value (female).
fn sex_mode(records: &[ClinicalRecord]) -> f64 {
    let mut male = 0usize;
    let mut female = 0usize;
    for record in records {
        match record.sex {
            Some(Sex::Male) => male += 1,
            Some(Sex::Female) => female += 1,
            None => {}
        }
    }
    if male > female {
        1.0
    } else {
        0.0
    }
}
