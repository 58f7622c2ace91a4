//! Batch ingestion: report blobs in, dataset CSV out.
//!
//! A blob is the text of one exported report file. Multi-page exports
//! separate pages with a form feed; each non-blank page is extracted
//! independently and the assembled records land in one CSV.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::ClinicalRecord;

use super::dataset::{self, Dataset, DatasetError};
use super::extraction::extract_record;

/// Page separator in exported report text.
pub const PAGE_BREAK: char = '\u{000C}';

/// Emit a progress line every this many pages; exports run to thousands.
const PROGRESS_EVERY: usize = 50;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// Counts for one ingestion run. Every non-blank page is either accepted
/// or rejected, so `pages == accepted + rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub pages: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Split a report blob into non-blank pages.
pub fn split_pages(blob: &str) -> impl Iterator<Item = &str> {
    blob.split(PAGE_BREAK).filter(|page| !page.trim().is_empty())
}

/// One record per page across every blob, in reading order.
pub fn extract_pages<'a, I>(blobs: I) -> Vec<ClinicalRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    for blob in blobs {
        for page in split_pages(blob) {
            let record = extract_record(page);
            if !record.has_heart_rate() {
                tracing::debug!(page = records.len() + 1, "Page yielded no heart rate");
            }
            records.push(record);
            if records.len() % PROGRESS_EVERY == 0 {
                tracing::info!(pages = records.len(), "Processed report pages");
            }
        }
    }
    records
}

/// Ingest a report file, or a directory of report files, into a dataset
/// CSV at `output`. Directory entries are processed in name order so
/// reruns produce identical files.
pub fn ingest_path(input: &Path, output: &Path) -> Result<IngestSummary, IngestError> {
    let blobs = read_blobs(input)?;
    let records = extract_pages(blobs.iter().map(String::as_str));
    let pages = records.len();

    let dataset = Dataset::assemble(records);
    dataset::write_csv(&dataset, output)?;

    let summary = IngestSummary {
        pages,
        accepted: dataset.accepted(),
        rejected: dataset.rejected,
    };
    tracing::info!(
        pages = summary.pages,
        accepted = summary.accepted,
        rejected = summary.rejected,
        output = %output.display(),
        "Ingestion complete"
    );
    Ok(summary)
}

fn read_blobs(input: &Path) -> io::Result<Vec<String>> {
    if !input.is_dir() {
        return Ok(vec![fs::read_to_string(input)?]);
    }
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(input)? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    paths.iter().map(fs::read_to_string).collect()
}
