use serde::{Deserialize, Serialize};

/// A label as it came back from the label codec, before the safety pass.
///
/// Artifacts produced from messy datasets can hand back strings that are
/// not diagnoses ("nan" from a stringified hole, empty cells). Tagging
/// the two cases keeps every later step a total match instead of string
/// sniffing at the display edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLabel {
    /// A printable diagnosis string, already trimmed.
    Valid(String),
    /// Absent, empty, or a stringified non-value.
    Invalid,
}

/// Where the authoritative answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionSource {
    #[serde(rename = "Clinical Rule")]
    Rule,
    #[serde(rename = "Machine Learning")]
    Model,
}

impl DecisionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DecisionSource::Rule => "Clinical Rule",
            DecisionSource::Model => "Machine Learning",
        }
    }
}

/// The authoritative diagnostic decision for one ECG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub label: String,
    /// Percent, within 0 to 100.
    pub confidence: f64,
    pub source: DecisionSource,
}

/// The statistical prediction handed to decision fusion: the decoded
/// class label plus the top class probability as a percent.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPrediction {
    pub label: RawLabel,
    pub confidence: f64,
}

/// Patient-facing risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Card accent color for this tier.
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "#198754",
            RiskLevel::Medium => "#fd7e14",
            RiskLevel::High => "#dc3545",
        }
    }
}

/// Everything the presentation layer needs to render one result card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub decision: DecisionResult,
    pub risk: RiskLevel,
    pub explanation: String,
}

/// Presentation-boundary state, owned by the caller. Nothing renders
/// until an assessment exists, and reset returns to a blank slate.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Assessed(Assessment),
}

impl SessionState {
    pub fn is_assessed(&self) -> bool {
        matches!(self, SessionState::Assessed(_))
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        match self {
            SessionState::Assessed(assessment) => Some(assessment),
            SessionState::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        *self = SessionState::Idle;
    }
}
