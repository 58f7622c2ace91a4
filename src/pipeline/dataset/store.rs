use std::path::Path;

use crate::models::ClinicalRecord;

use super::{Dataset, DatasetError};

/// Persist a dataset as CSV. Column names come from the record's serde
/// renames, so the file is immediately loadable by the offline trainer,
/// and missing fields serialize as empty cells.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in &dataset.records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    tracing::info!(records = dataset.accepted(), path = %path.display(), "Wrote dataset CSV");
    Ok(())
}

/// Load a dataset previously written by [`write_csv`]. Empty cells come
/// back as `None`; the rejected count restarts at zero because the file
/// only ever contains accepted records.
pub fn read_csv(path: &Path) -> Result<Dataset, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<ClinicalRecord>() {
        records.push(row?);
    }
    tracing::debug!(records = records.len(), path = %path.display(), "Read dataset CSV");
    Ok(Dataset {
        records,
        rejected: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;
    use tempfile::tempdir;

    fn full_record() -> ClinicalRecord {
        ClinicalRecord {
            age_years: Some(45),
            sex: Some(Sex::Male),
            heart_rate_bpm: Some(72),
            p_duration_ms: Some(98),
            pr_interval_ms: Some(158),
            qrs_duration_ms: Some(96),
            qt_interval_ms: Some(396),
            qtc_interval_ms: Some(428),
            p_axis_deg: Some(58),
            qrs_axis_deg: Some(-44),
            t_axis_deg: Some(39),
            rv5_mv: Some(1.18),
            sv1_mv: Some(0.62),
            diagnosis: Some("Sinus Rhythm | Otherwise normal ECG".to_string()),
        }
    }

    #[test]
    fn dataset_round_trips_including_missing_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ecg.csv");
        let sparse = ClinicalRecord {
            heart_rate_bpm: Some(88),
            ..Default::default()
        };
        let dataset = Dataset {
            records: vec![full_record(), sparse],
            rejected: 3,
        };

        write_csv(&dataset, &path).unwrap();
        let loaded = read_csv(&path).unwrap();

        assert_eq!(loaded.records, dataset.records);
        assert_eq!(loaded.rejected, 0);
    }

    #[test]
    fn header_row_uses_trainer_column_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ecg.csv");
        let dataset = Dataset {
            records: vec![full_record()],
            rejected: 0,
        };
        write_csv(&dataset, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "Age,Gender,HR,P_ms,PR_ms,QRS_ms,QT_ms,QTc_ms,P_axis,QRS_axis,T_axis,RV5,SV1,Diagnosis"
        );
    }

    #[test]
    fn read_csv_surfaces_missing_files_as_errors() {
        let dir = tempdir().unwrap();
        assert!(read_csv(&dir.path().join("absent.csv")).is_err());
    }
}
