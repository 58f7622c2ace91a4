//! Clinical override rules.
//!
//! Deterministic thresholds over the recorded vitals outrank the
//! statistical model: a heart rate of 180 bpm is tachycardia no matter
//! what the forest thinks. Rules are checked in clinical priority order
//! and the first match wins, so at most one rule speaks per assessment.
//!
//! All comparisons are closed: a value sitting exactly on its threshold
//! fires the rule.

/// Rate at or above which the tachycardia rule fires, in bpm.
pub const TACHYCARDIA_MIN_BPM: f64 = 100.0;
/// Rate at or below which the bradycardia rule fires, in bpm.
pub const BRADYCARDIA_MAX_BPM: f64 = 50.0;
/// Corrected QT at or above which the prolonged QT rule fires, in ms.
pub const PROLONGED_QT_MIN_MS: f64 = 480.0;
/// QRS duration at or above which the wide QRS rule fires, in ms.
pub const WIDE_QRS_MIN_MS: f64 = 150.0;

/// Confidence attached to any fired rule.
pub const RULE_CONFIDENCE: f64 = 95.0;

/// A fired override: the label to report and the confidence to attach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverrideMatch {
    pub label: &'static str,
    pub confidence: f64,
}

/// A hard-coded threshold rule.
struct OverrideRule {
    condition: OverrideCondition,
    label: &'static str,
    confidence: f64,
}

/// Condition under which an override rule fires.
enum OverrideCondition {
    HeartRateAtLeast(f64),
    HeartRateAtMost(f64),
    QtcAtLeast(f64),
    QrsAtLeast(f64),
}

impl OverrideCondition {
    fn matches(&self, heart_rate_bpm: f64, qtc_ms: f64, qrs_ms: f64) -> bool {
        match self {
            Self::HeartRateAtLeast(bpm) => heart_rate_bpm >= *bpm,
            Self::HeartRateAtMost(bpm) => heart_rate_bpm <= *bpm,
            Self::QtcAtLeast(ms) => qtc_ms >= *ms,
            Self::QrsAtLeast(ms) => qrs_ms >= *ms,
        }
    }
}

/// Rule registry in priority order: rate disturbances first, then
/// conduction findings.
const RULES: [OverrideRule; 4] = [
    OverrideRule {
        condition: OverrideCondition::HeartRateAtLeast(TACHYCARDIA_MIN_BPM),
        label: "Sinus Tachycardia",
        confidence: RULE_CONFIDENCE,
    },
    OverrideRule {
        condition: OverrideCondition::HeartRateAtMost(BRADYCARDIA_MAX_BPM),
        label: "Sinus Bradycardia",
        confidence: RULE_CONFIDENCE,
    },
    OverrideRule {
        condition: OverrideCondition::QtcAtLeast(PROLONGED_QT_MIN_MS),
        label: "Prolonged QT Interval",
        confidence: RULE_CONFIDENCE,
    },
    OverrideRule {
        condition: OverrideCondition::QrsAtLeast(WIDE_QRS_MIN_MS),
        label: "Wide QRS Complex",
        confidence: RULE_CONFIDENCE,
    },
];

/// Check the vitals against every rule in priority order.
///
/// Returns `None` when no threshold is crossed and the model's answer
/// should stand.
pub fn check_override(heart_rate_bpm: f64, qtc_ms: f64, qrs_ms: f64) -> Option<OverrideMatch> {
    for rule in &RULES {
        if rule.condition.matches(heart_rate_bpm, qtc_ms, qrs_ms) {
            tracing::info!(
                label = rule.label,
                heart_rate_bpm,
                qtc_ms,
                qrs_ms,
                "Clinical override fired"
            );
            return Some(OverrideMatch {
                label: rule.label,
                confidence: rule.confidence,
            });
        }
    }
    None
}
