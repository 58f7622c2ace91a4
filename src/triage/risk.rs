//! Risk banding and patient-facing wording.
//!
//! Both functions are total over arbitrary label strings: anything the
//! tables do not recognize is treated as the cautious case, never an
//! error.

use super::labels::NORMAL_LABEL;
use super::types::RiskLevel;

/// Band a final (normalized) label into a risk tier. Unknown labels are
/// banded high so novel model classes read as "see a doctor", not "fine".
pub fn risk_level(label: &str) -> RiskLevel {
    match label {
        NORMAL_LABEL => RiskLevel::Low,
        "Sinus Tachycardia" | "Sinus Bradycardia" => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

/// One-paragraph plain-language explanation for the result card.
pub fn patient_explanation(label: &str) -> &'static str {
    match label {
        "Normal Sinus Rhythm" => {
            "Your heart rhythm is normal. Electrical signals are working properly and no \
             significant abnormalities were detected."
        }
        "Sinus Tachycardia" => {
            "Your heart is beating faster than normal. This can happen due to stress, fever, \
             exercise, or other conditions."
        }
        "Sinus Bradycardia" => {
            "Your heart is beating slower than normal. This can be normal in athletes, but \
             should be reviewed if symptoms are present."
        }
        "Prolonged QT Interval" => {
            "The electrical recovery of your heart is slower than normal. This may increase \
             the risk of abnormal heart rhythms."
        }
        "Wide QRS Complex" => {
            "The electrical signal in your heart is taking longer to travel through the \
             ventricles. Further evaluation is recommended."
        }
        _ => "This ECG pattern should be reviewed by a healthcare professional.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_rhythm_is_low_risk() {
        assert_eq!(risk_level("Normal Sinus Rhythm"), RiskLevel::Low);
    }

    #[test]
    fn rate_disturbances_are_medium_risk() {
        assert_eq!(risk_level("Sinus Tachycardia"), RiskLevel::Medium);
        assert_eq!(risk_level("Sinus Bradycardia"), RiskLevel::Medium);
    }

    #[test]
    fn everything_else_is_high_risk() {
        assert_eq!(risk_level("Prolonged QT Interval"), RiskLevel::High);
        assert_eq!(risk_level("Atrial Fibrillation"), RiskLevel::High);
        assert_eq!(risk_level(""), RiskLevel::High);
        assert_eq!(risk_level("normal sinus rhythm"), RiskLevel::High);
    }

    #[test]
    fn known_labels_have_specific_explanations() {
        for label in [
            "Normal Sinus Rhythm",
            "Sinus Tachycardia",
            "Sinus Bradycardia",
            "Prolonged QT Interval",
            "Wide QRS Complex",
        ] {
            let text = patient_explanation(label);
            assert_ne!(
                text,
                "This ECG pattern should be reviewed by a healthcare professional."
            );
        }
    }

    #[test]
    fn unknown_labels_get_the_review_advice() {
        assert_eq!(
            patient_explanation("Junctional Escape Rhythm"),
            "This ECG pattern should be reviewed by a healthcare professional."
        );
    }
}
