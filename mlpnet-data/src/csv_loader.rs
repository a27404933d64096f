use crate::error::DataError;
use crate::sample::Sample;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads delimited text where each record is `f1,...,fk,label`.
///
/// Blank lines are ignored, surrounding whitespace in fields is trimmed and
/// the first `skip` records (e.g. a header line) are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvDataLoader {
    delimiter: u8,
    skip: usize,
    feature_count: usize,
}

impl CsvDataLoader {
    /// Comma-delimited loader expecting `feature_count` numeric fields and a label.
    pub fn new(feature_count: usize) -> Self {
        CsvDataLoader {
            delimiter: b',',
            skip: 0,
            feature_count,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// Loads every sample of the file at `path`.
    ///
    /// # Errors
    ///
    /// - `DataError::Io` if the file cannot be opened.
    /// - `DataError::MalformedRow` for a record with the wrong number of fields,
    ///   a non-numeric feature or an empty label.
    /// - `DataError::Csv` if the underlying reader fails.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Sample>, DataError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let samples = self.load_from_reader(file)?;
        info!("Loaded {} samples from {}", samples.len(), path.display());
        Ok(samples)
    }

    /// Same as [`load`](Self::load) for any byte source.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<Vec<Sample>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut samples = Vec::new();
        for record in reader.records().skip(self.skip) {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record.position().map_or(0, |p| p.line());
            samples.push(self.parse_record(&record, line)?);
        }
        debug!("Parsed {} records ({} skipped)", samples.len(), self.skip);
        Ok(samples)
    }

    fn parse_record(&self, record: &StringRecord, line: u64) -> Result<Sample, DataError> {
        if record.len() != self.feature_count + 1 {
            return Err(DataError::MalformedRow {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    self.feature_count + 1,
                    record.len()
                ),
            });
        }

        let mut features = Vec::with_capacity(self.feature_count);
        for (i, field) in record.iter().take(self.feature_count).enumerate() {
            let value = field.parse::<f64>().map_err(|e| DataError::MalformedRow {
                line,
                message: format!("feature {} ({:?}): {}", i, field, e),
            })?;
            features.push(value);
        }

        let label = &record[self.feature_count];
        if label.is_empty() {
            return Err(DataError::MalformedRow {
                line,
                message: "empty label".to_string(),
            });
        }
        Ok(Sample::new(features, label))
    }
}

#[cfg(test)]
#[path = "csv_loader_test.rs"]
mod tests;
