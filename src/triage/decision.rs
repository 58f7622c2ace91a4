use crate::models::EcgInputs;
use crate::pipeline::inference::{DiagnosticModel, LabelCodec};

use super::labels::{normalize_label, safe_label, screen_label};
use super::overrides::check_override;
use super::risk::{patient_explanation, risk_level};
use super::types::{Assessment, DecisionResult, DecisionSource, ModelPrediction};

/// Fuse the clinical overrides with the statistical prediction.
///
/// A fired rule discards the model's label and confidence outright. Only
/// when no rule speaks does the model's answer stand, safety-passed and
/// normalized, with its confidence clamped into percent range.
pub fn decide(
    prediction: ModelPrediction,
    heart_rate_bpm: f64,
    qtc_ms: f64,
    qrs_ms: f64,
) -> DecisionResult {
    if let Some(rule) = check_override(heart_rate_bpm, qtc_ms, qrs_ms) {
        return DecisionResult {
            label: rule.label.to_string(),
            confidence: rule.confidence,
            source: DecisionSource::Rule,
        };
    }

    DecisionResult {
        label: normalize_label(safe_label(&prediction.label)).to_string(),
        confidence: prediction.confidence.clamp(0.0, 100.0),
        source: DecisionSource::Model,
    }
}

/// One-call assessment for the presentation boundary: run the model,
/// decode and screen its label, fuse with the overrides, band the risk.
pub fn assess<M: DiagnosticModel>(model: &M, codec: &LabelCodec, inputs: &EcgInputs) -> Assessment {
    let features = inputs.feature_vector();
    let class = model.predict(&features);
    let proba = model.predict_proba(&features);
    // Top class probability as a percent, NaN-proof via fold.
    let confidence = 100.0 * proba.iter().copied().fold(0.0_f64, f64::max);

    let prediction = ModelPrediction {
        label: screen_label(codec.decode(class)),
        confidence,
    };
    let decision = decide(
        prediction,
        inputs.heart_rate_bpm,
        inputs.qtc_interval_ms,
        inputs.qrs_duration_ms,
    );
    let risk = risk_level(&decision.label);
    let explanation = patient_explanation(&decision.label).to_string();

    tracing::info!(
        label = %decision.label,
        confidence = decision.confidence,
        source = decision.source.as_str(),
        risk = risk.as_str(),
        "Assessment complete"
    );

    Assessment {
        decision,
        risk,
        explanation,
    }
}
