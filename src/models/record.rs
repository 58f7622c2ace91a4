use serde::{Deserialize, Serialize};

/// Separator used when a report carries more than one diagnosis line.
/// The first segment is the primary diagnosis.
pub const DIAGNOSIS_SEPARATOR: &str = " | ";

/// Patient sex as printed on the report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Sex::Male),
            "Female" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Numeric encoding the classifier was trained on (male = 1, female = 0).
    pub fn encoded(self) -> f64 {
        match self {
            Sex::Male => 1.0,
            Sex::Female => 0.0,
        }
    }
}

/// One ECG report reduced to its structured fields.
///
/// Every field is optional: extraction never fails, it just leaves holes
/// where the report text did not match. Serde renames pin the dataset
/// column names, so CSV round-trips are lossless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    #[serde(rename = "Age")]
    pub age_years: Option<u32>,
    #[serde(rename = "Gender")]
    pub sex: Option<Sex>,
    #[serde(rename = "HR")]
    pub heart_rate_bpm: Option<u32>,
    #[serde(rename = "P_ms")]
    pub p_duration_ms: Option<u32>,
    #[serde(rename = "PR_ms")]
    pub pr_interval_ms: Option<u32>,
    #[serde(rename = "QRS_ms")]
    pub qrs_duration_ms: Option<u32>,
    #[serde(rename = "QT_ms")]
    pub qt_interval_ms: Option<u32>,
    #[serde(rename = "QTc_ms")]
    pub qtc_interval_ms: Option<u32>,
    #[serde(rename = "P_axis")]
    pub p_axis_deg: Option<i32>,
    #[serde(rename = "QRS_axis")]
    pub qrs_axis_deg: Option<i32>,
    #[serde(rename = "T_axis")]
    pub t_axis_deg: Option<i32>,
    #[serde(rename = "RV5")]
    pub rv5_mv: Option<f64>,
    #[serde(rename = "SV1")]
    pub sv1_mv: Option<f64>,
    #[serde(rename = "Diagnosis")]
    pub diagnosis: Option<String>,
}

impl ClinicalRecord {
    /// A record without a heart rate carries too little signal to keep.
    pub fn has_heart_rate(&self) -> bool {
        self.heart_rate_bpm.is_some()
    }

    /// First segment of the diagnosis field, trimmed. Reports often list
    /// several findings; the first line is the primary one.
    pub fn primary_diagnosis(&self) -> Option<&str> {
        let text = self.diagnosis.as_deref()?;
        let first = text.split('|').next().unwrap_or(text).trim();
        if first.is_empty() {
            None
        } else {
            Some(first)
        }
    }
}
