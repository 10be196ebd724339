//! CSV index series source.

use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use renta_bonds::indices::{IndexSample, IndexSeries};
use renta_core::types::Date;
use renta_traits::{IndexSeriesSource, TraitError};

use crate::error::{FileSourceError, FileSourceResult};
use crate::reader::{csv_reader, open};

const INDEX_FILE: &str = "index.csv";

#[derive(Debug, Deserialize)]
struct IndexRecord {
    date: String,
    value: f64,
}

/// Parses a `date,value` file into a series.
///
/// Values must be finite and positive. Duplicate dates keep the last value.
pub fn parse_index_series<R: Read>(input: R, name: &str) -> FileSourceResult<IndexSeries> {
    let mut reader = csv_reader(input, INDEX_FILE, &["date", "value"])?;
    let mut samples = Vec::new();

    for (i, result) in reader.deserialize::<IndexRecord>().enumerate() {
        let line = i as u64 + 2;
        let record = result?;
        if record.date.is_empty() {
            continue;
        }
        let date = Date::parse(&record.date)
            .map_err(|e| FileSourceError::invalid_row(INDEX_FILE, line, e.to_string()))?;
        if !record.value.is_finite() || record.value <= 0.0 {
            return Err(FileSourceError::invalid_row(
                INDEX_FILE,
                line,
                format!("index value {} must be positive", record.value),
            ));
        }
        samples.push(IndexSample::new(date, record.value));
    }

    Ok(IndexSeries::new(name, samples))
}

/// Index series read from a CSV file.
pub struct CsvIndexSeriesSource {
    path: PathBuf,
    name: String,
}

impl CsvIndexSeriesSource {
    /// Creates a source named after the file stem (`cer.csv` gives `CER`).
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_uppercase())
            .unwrap_or_else(|| "INDEX".to_string());
        Self { path, name }
    }

    /// Overrides the series name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Reads the file.
    pub fn load(&self) -> FileSourceResult<IndexSeries> {
        parse_index_series(open(&self.path)?, &self.name)
    }
}

#[async_trait]
impl IndexSeriesSource for CsvIndexSeriesSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load_series(&self) -> Result<IndexSeries, TraitError> {
        let series = self.load()?;
        info!(
            series = %self.name,
            samples = series.len(),
            last = ?series.last().map(|s| s.date),
            "Index series loaded"
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_series() {
        let csv = "Date,Value\n2025-01-02,100.5\n2025-01-03,100.7\n";
        let series = parse_index_series(csv.as_bytes(), "CER").unwrap();
        assert_eq!(series.name(), "CER");
        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().value, 100.7);
    }

    #[test]
    fn test_rejects_non_positive_value() {
        let csv = "date,value\n2025-01-02,100.5\n2025-01-03,0\n";
        let err = parse_index_series(csv.as_bytes(), "CER").unwrap_err();
        match err {
            FileSourceError::InvalidRow { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("positive"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_name_from_stem() {
        let source = CsvIndexSeriesSource::new("/data/cer.csv");
        assert_eq!(IndexSeriesSource::name(&source), "CER");
        let source = source.with_name("UVA");
        assert_eq!(IndexSeriesSource::name(&source), "UVA");
    }
}
