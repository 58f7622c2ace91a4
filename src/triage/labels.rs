//! Label hygiene: screening, fallback substitution, normalization.
//!
//! Three tiny steps between the codec and the result card. Screening
//! classifies the decoded string, the safety pass substitutes a neutral
//! fallback for anything unprintable, and normalization collapses the
//! aliases different report generations used for a normal tracing.

use super::types::RawLabel;

/// Canonical label for a normal tracing.
pub const NORMAL_LABEL: &str = "Normal Sinus Rhythm";

/// Shown whenever the model's label is missing or unprintable. Runs
/// through normalization like any other label, so it also lands on
/// [`NORMAL_LABEL`].
pub const FALLBACK_LABEL: &str = "Sinus Rhythm / Normal ECG";

/// Spellings that collapse to [`NORMAL_LABEL`].
const NORMAL_ALIASES: [&str; 3] = ["Sinus Rhythm", "Normal ECG", "Sinus Rhythm / Normal ECG"];

/// Stringified non-values seen in labels trained from holey datasets.
const NON_VALUES: [&str; 2] = ["nan", "none"];

/// Classify a decoded label. `None` (index out of codec range), empty
/// or whitespace-only strings, and case-insensitive non-values are all
/// invalid; anything else survives trimmed.
pub fn screen_label(decoded: Option<&str>) -> RawLabel {
    let Some(label) = decoded else {
        return RawLabel::Invalid;
    };
    let trimmed = label.trim();
    if trimmed.is_empty() || NON_VALUES.contains(&trimmed.to_lowercase().as_str()) {
        return RawLabel::Invalid;
    }
    RawLabel::Valid(trimmed.to_string())
}

/// The safety pass: every invalid label becomes the fallback. Total by
/// construction, so nothing unprintable can reach the result card.
pub fn safe_label(label: &RawLabel) -> &str {
    match label {
        RawLabel::Valid(label) => label,
        RawLabel::Invalid => FALLBACK_LABEL,
    }
}

/// Collapse known aliases of a normal tracing; pass everything else
/// through unchanged. Idempotent, since [`NORMAL_LABEL`] is not an alias
/// of itself.
pub fn normalize_label(label: &str) -> &str {
    if NORMAL_ALIASES.contains(&label) {
        NORMAL_LABEL
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── screening ──

    #[test]
    fn printable_labels_survive_screening_trimmed() {
        assert_eq!(
            screen_label(Some("  Sinus Rhythm ")),
            RawLabel::Valid("Sinus Rhythm".to_string())
        );
    }

    #[test]
    fn absent_labels_are_invalid() {
        assert_eq!(screen_label(None), RawLabel::Invalid);
    }

    #[test]
    fn stringified_non_values_are_invalid_in_any_case() {
        for label in ["nan", "NaN", "NAN", "none", "None", "", "   "] {
            assert_eq!(screen_label(Some(label)), RawLabel::Invalid, "{label:?}");
        }
    }

    // ── safety pass ──

    #[test]
    fn invalid_labels_become_the_fallback() {
        assert_eq!(safe_label(&RawLabel::Invalid), FALLBACK_LABEL);
    }

    #[test]
    fn valid_labels_pass_the_safety_pass_untouched() {
        let label = RawLabel::Valid("Atrial Fibrillation".to_string());
        assert_eq!(safe_label(&label), "Atrial Fibrillation");
    }

    // ── normalization ──

    #[test]
    fn aliases_collapse_to_the_canonical_normal_label() {
        for alias in ["Sinus Rhythm", "Normal ECG", "Sinus Rhythm / Normal ECG"] {
            assert_eq!(normalize_label(alias), NORMAL_LABEL);
        }
    }

    #[test]
    fn non_aliases_pass_through_unchanged() {
        assert_eq!(normalize_label("Sinus Tachycardia"), "Sinus Tachycardia");
        assert_eq!(normalize_label("sinus rhythm"), "sinus rhythm");
    }

    #[test]
    fn normalization_is_idempotent() {
        for label in ["Sinus Rhythm", "Normal Sinus Rhythm", "Wide QRS Complex"] {
            let once = normalize_label(label);
            assert_eq!(normalize_label(once), once);
        }
    }

    #[test]
    fn the_fallback_normalizes_to_the_canonical_label() {
        assert_eq!(normalize_label(FALLBACK_LABEL), NORMAL_LABEL);
    }
}
