//! Diagnostic triage: from model output to a result the card can show.
//!
//! Four small layers, applied in order:
//! 1. Clinical overrides: deterministic thresholds that outrank the model
//! 2. Label hygiene: screening plus fallback and alias normalization
//! 3. Decision fusion: one authoritative label with confidence and source
//! 4. Risk banding: patient-facing tier with color and explanation

pub mod decision;
pub mod labels;
pub mod overrides;
pub mod risk;
pub mod types;

pub use decision::{assess, decide};
pub use labels::{normalize_label, safe_label, screen_label, FALLBACK_LABEL, NORMAL_LABEL};
pub use overrides::{check_override, OverrideMatch, RULE_CONFIDENCE};
pub use risk::{patient_explanation, risk_level};
pub use types::{
    Assessment, DecisionResult, DecisionSource, ModelPrediction, RawLabel, RiskLevel, SessionState,
};
