use crate::models::ClinicalRecord;

use super::probes;

/// Extract a structured record from one page of ECG report text.
///
/// Total over arbitrary input: unmatched fields come back as `None` and
/// never abort the page. Whether the record is worth keeping is decided
/// later by dataset assembly, not here.
pub fn extract_record(text: &str) -> ClinicalRecord {
    let (qt_interval_ms, qtc_interval_ms) = probes::qt_pair(text).unzip();
    let (rv5_mv, sv1_mv) = probes::amplitude_pair(text).unzip();
    let (p_axis_deg, qrs_axis_deg, t_axis_deg) = match probes::axis_triple(text) {
        Some((p, qrs, t)) => (Some(p), Some(qrs), Some(t)),
        None => (None, None, None),
    };

    ClinicalRecord {
        age_years: probes::age(text),
        sex: probes::sex(text),
        heart_rate_bpm: probes::heart_rate(text),
        p_duration_ms: probes::p_duration(text),
        pr_interval_ms: probes::pr_interval(text),
        qrs_duration_ms: probes::qrs_duration(text),
        qt_interval_ms,
        qtc_interval_ms,
        p_axis_deg,
        qrs_axis_deg,
        t_axis_deg,
        rv5_mv,
        sv1_mv,
        diagnosis: probes::diagnosis(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    const FULL_REPORT: &str = "\
Cardiology Department            Page 3
Patient: 0001203        45 Years   Male
Vent. rate     HR : 72 bpm
P : 98 ms
PR : 158 ms
QRS : 96 ms
QT/QTc : 396/428 ms
P/QRS/T : 58/-44/39
RV5/SV1 : 1.18/0.62 mV
Diagnosis Information:
Sinus Rhythm
Otherwise normal ECG
Report Confirmed by: Dr. Mensah
";

    #[test]
    fn full_report_yields_every_field() {
        let record = extract_record(FULL_REPORT);
        assert_eq!(record.age_years, Some(45));
        assert_eq!(record.sex, Some(Sex::Male));
        assert_eq!(record.heart_rate_bpm, Some(72));
        assert_eq!(record.p_duration_ms, Some(98));
        assert_eq!(record.pr_interval_ms, Some(158));
        assert_eq!(record.qrs_duration_ms, Some(96));
        assert_eq!(record.qt_interval_ms, Some(396));
        assert_eq!(record.qtc_interval_ms, Some(428));
        assert_eq!(record.p_axis_deg, Some(58));
        assert_eq!(record.qrs_axis_deg, Some(-44));
        assert_eq!(record.t_axis_deg, Some(39));
        assert_eq!(record.rv5_mv, Some(1.18));
        assert_eq!(record.sv1_mv, Some(0.62));
        assert_eq!(
            record.diagnosis.as_deref(),
            Some("Sinus Rhythm | Otherwise normal ECG")
        );
    }

    #[test]
    fn partial_report_leaves_holes_instead_of_failing() {
        let record = extract_record("HR : 88 bpm\nQRS : 102 ms\n");
        assert_eq!(record.heart_rate_bpm, Some(88));
        assert_eq!(record.qrs_duration_ms, Some(102));
        assert_eq!(record.age_years, None);
        assert_eq!(record.qt_interval_ms, None);
        assert_eq!(record.diagnosis, None);
    }

    #[test]
    fn garbled_combined_line_drops_both_halves() {
        let record = extract_record("HR : 70\nQT/QTc : 400/?? ms\n");
        assert_eq!(record.heart_rate_bpm, Some(70));
        assert_eq!(record.qt_interval_ms, None);
        assert_eq!(record.qtc_interval_ms, None);
    }

    #[test]
    fn arbitrary_text_produces_an_empty_record() {
        let record = extract_record("lorem ipsum \u{0} \u{FFFD} 12/34");
        assert_eq!(record, ClinicalRecord::default());
    }

    #[test]
    fn empty_page_produces_an_empty_record() {
        assert_eq!(extract_record(""), ClinicalRecord::default());
    }
}
