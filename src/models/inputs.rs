use serde::{Deserialize, Serialize};

use super::record::Sex;

/// Number of features the classifier consumes, in trained column order.
pub const FEATURE_COUNT: usize = 13;

/// The thirteen measurements collected at the presentation boundary for a
/// single assessment. Unlike [`super::ClinicalRecord`], nothing here is
/// optional: the caller supplies every value (typically pre-filled with
/// population defaults and edited by the clinician).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcgInputs {
    pub age_years: f64,
    pub sex: Sex,
    pub heart_rate_bpm: f64,
    pub p_duration_ms: f64,
    pub pr_interval_ms: f64,
    pub qrs_duration_ms: f64,
    pub qt_interval_ms: f64,
    pub qtc_interval_ms: f64,
    pub p_axis_deg: f64,
    pub qrs_axis_deg: f64,
    pub t_axis_deg: f64,
    pub rv5_mv: f64,
    pub sv1_mv: f64,
}

impl EcgInputs {
    /// Feature vector in the exact order the classifier was trained on:
    /// age, sex (male = 1), HR, P, PR, QRS, QT, QTc, P/QRS/T axes, RV5, SV1.
    pub fn feature_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age_years,
            self.sex.encoded(),
            self.heart_rate_bpm,
            self.p_duration_ms,
            self.pr_interval_ms,
            self.qrs_duration_ms,
            self.qt_interval_ms,
            self.qtc_interval_ms,
            self.p_axis_deg,
            self.qrs_axis_deg,
            self.t_axis_deg,
            self.rv5_mv,
            self.sv1_mv,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EcgInputs {
        EcgInputs {
            age_years: 45.0,
            sex: Sex::Male,
            heart_rate_bpm: 70.0,
            p_duration_ms: 90.0,
            pr_interval_ms: 160.0,
            qrs_duration_ms: 100.0,
            qt_interval_ms: 400.0,
            qtc_interval_ms: 430.0,
            p_axis_deg: 60.0,
            qrs_axis_deg: 50.0,
            t_axis_deg: 70.0,
            rv5_mv: 1.0,
            sv1_mv: 1.0,
        }
    }

    #[test]
    fn feature_vector_preserves_trained_column_order() {
        let features = sample().feature_vector();
        assert_eq!(
            features,
            [45.0, 1.0, 70.0, 90.0, 160.0, 100.0, 400.0, 430.0, 60.0, 50.0, 70.0, 1.0, 1.0]
        );
    }

    #[test]
    fn feature_vector_encodes_female_as_zero() {
        let mut inputs = sample();
        inputs.sex = Sex::Female;
        assert_eq!(inputs.feature_vector()[1], 0.0);
    }
}
