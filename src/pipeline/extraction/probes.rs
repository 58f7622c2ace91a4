//! Field probes over raw ECG report text.
//!
//! Each probe is a compiled pattern matched against one page of report
//! text. A miss is a missing value, never an error: report layouts vary
//! and extraction must stay total. Probes that read several values from
//! one line (QT/QTc, the axis triple, RV5/SV1) are atomic: if any part
//! of the line fails to parse, the whole probe reports nothing.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Sex, DIAGNOSIS_SEPARATOR};

static AGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*Years").unwrap());
static SEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Years\s*(Male|Female)").unwrap());
static HEART_RATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"HR\s*:\s*(\d+)").unwrap());
static P_DURATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"P\s*:\s*(\d+)\s*ms").unwrap());
static PR_INTERVAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"PR\s*:\s*(\d+)\s*ms").unwrap());
static QRS_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"QRS\s*:\s*(\d+)\s*ms").unwrap());
static QT_PAIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"QT/QTc\s*:\s*(\d+)/(\d+)").unwrap());
static AXIS_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"P/QRS/T\s*:\s*([-\d]+)/([-\d]+)/([-\d]+)").unwrap());
static AMPLITUDE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RV5/SV1\s*:\s*([\d.]+)/([\d.]+)").unwrap());
// (?s) lets the block span lines; .*? stops at the first confirmation footer.
static DIAGNOSIS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Diagnosis Information:\s*(.*?)\nReport Confirmed by:").unwrap()
});

/// First capture group, trimmed. `None` when the pattern does not match.
fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

fn capture_one<T: FromStr>(re: &Regex, text: &str) -> Option<T> {
    capture(re, text).and_then(|s| s.parse().ok())
}

fn capture_pair<A: FromStr, B: FromStr>(re: &Regex, text: &str) -> Option<(A, B)> {
    let caps = re.captures(text)?;
    let a = caps.get(1)?.as_str().parse().ok()?;
    let b = caps.get(2)?.as_str().parse().ok()?;
    Some((a, b))
}

fn capture_triple<T: FromStr>(re: &Regex, text: &str) -> Option<(T, T, T)> {
    let caps = re.captures(text)?;
    let a = caps.get(1)?.as_str().parse().ok()?;
    let b = caps.get(2)?.as_str().parse().ok()?;
    let c = caps.get(3)?.as_str().parse().ok()?;
    Some((a, b, c))
}

/// Age in years from the demographics header (`"45 Years"`).
pub fn age(text: &str) -> Option<u32> {
    capture_one(&AGE, text)
}

/// Sex token immediately after the age (`"45 Years Male"`).
pub fn sex(text: &str) -> Option<Sex> {
    capture(&SEX, text).and_then(Sex::from_str)
}

/// Ventricular rate in bpm (`"HR : 72"`).
pub fn heart_rate(text: &str) -> Option<u32> {
    capture_one(&HEART_RATE, text)
}

/// P wave duration in ms (`"P : 98 ms"`).
pub fn p_duration(text: &str) -> Option<u32> {
    capture_one(&P_DURATION, text)
}

/// PR interval in ms (`"PR : 158 ms"`).
pub fn pr_interval(text: &str) -> Option<u32> {
    capture_one(&PR_INTERVAL, text)
}

/// QRS duration in ms (`"QRS : 96 ms"`).
pub fn qrs_duration(text: &str) -> Option<u32> {
    capture_one(&QRS_DURATION, text)
}

/// QT and QTc in ms from the combined line (`"QT/QTc : 396/428"`).
pub fn qt_pair(text: &str) -> Option<(u32, u32)> {
    capture_pair(&QT_PAIR, text)
}

/// P, QRS and T axes in degrees (`"P/QRS/T : 58/44/39"`), any of which
/// may be negative.
pub fn axis_triple(text: &str) -> Option<(i32, i32, i32)> {
    capture_triple(&AXIS_TRIPLE, text)
}

/// RV5 and SV1 amplitudes in mV (`"RV5/SV1 : 1.18/0.62"`).
pub fn amplitude_pair(text: &str) -> Option<(f64, f64)> {
    capture_pair(&AMPLITUDE_PAIR, text)
}

/// Free-text diagnosis block between the `Diagnosis Information:` marker
/// and the confirmation footer. Non-empty lines are joined with
/// [`DIAGNOSIS_SEPARATOR`] so the primary finding stays first.
pub fn diagnosis(text: &str) -> Option<String> {
    let block = capture(&DIAGNOSIS_BLOCK, text)?;
    let joined = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(DIAGNOSIS_SEPARATOR);
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
