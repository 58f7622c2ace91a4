use crate::models::ClinicalRecord;

/// A batch of accepted clinical records.
///
/// Assembly is the only gate between extraction and storage: records
/// without a heart rate carry too little signal and are dropped here,
/// counted but never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<ClinicalRecord>,
    pub rejected: usize,
}

impl Dataset {
    /// Filter a stream of extracted records, preserving input order.
    pub fn assemble<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ClinicalRecord>,
    {
        let mut dataset = Dataset::default();
        for record in records {
            if record.has_heart_rate() {
                dataset.records.push(record);
            } else {
                dataset.rejected += 1;
            }
        }
        tracing::debug!(
            accepted = dataset.records.len(),
            rejected = dataset.rejected,
            "Assembled record batch"
        );
        dataset
    }

    pub fn accepted(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_heart_rate(bpm: u32) -> ClinicalRecord {
        ClinicalRecord {
            heart_rate_bpm: Some(bpm),
            ..Default::default()
        }
    }

    #[test]
    fn records_without_heart_rate_are_rejected() {
        let dataset = Dataset::assemble(vec![
            with_heart_rate(72),
            ClinicalRecord::default(),
            with_heart_rate(105),
        ]);
        assert_eq!(dataset.accepted(), 2);
        assert_eq!(dataset.rejected, 1);
    }

    #[test]
    fn input_order_is_preserved() {
        let dataset = Dataset::assemble(vec![with_heart_rate(60), with_heart_rate(90)]);
        assert_eq!(dataset.records[0].heart_rate_bpm, Some(60));
        assert_eq!(dataset.records[1].heart_rate_bpm, Some(90));
    }

    #[test]
    fn empty_input_yields_an_empty_dataset() {
        let dataset = Dataset::assemble(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.rejected, 0);
    }

    #[test]
    fn partial_records_survive_as_long_as_heart_rate_is_present() {
        let record = with_heart_rate(58);
        let dataset = Dataset::assemble(vec![record.clone()]);
        assert_eq!(dataset.records, vec![record]);
    }
}
