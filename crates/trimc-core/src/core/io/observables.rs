use crate::core::models::configuration::Configuration;
use crate::core::observables::Observable;
use crate::core::utils::formatting::format_scientific;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservableLogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Append-only table of observable values, one row per checkpoint.
///
/// The header is `t cycle <names...>`; rows hold the integer time and cycle followed by one
/// scientific-notation value per observable, all separated by single spaces.
pub struct ObservableLog<W: Write> {
    writer: csv::Writer<W>,
    observables: Vec<Observable>,
    rows: usize,
}

impl ObservableLog<File> {
    /// Creates (truncating) the file at `path` and writes the header.
    pub fn create<P: AsRef<Path>>(
        path: P,
        observables: &[Observable],
    ) -> Result<Self, ObservableLogError> {
        let file = File::create(path)?;
        Self::new(file, observables)
    }
}

impl<W: Write> ObservableLog<W> {
    pub fn new(inner: W, observables: &[Observable]) -> Result<Self, ObservableLogError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_writer(inner);
        let mut header = vec!["t", "cycle"];
        header.extend(observables.iter().map(|o| o.name()));
        writer.write_record(&header)?;
        Ok(Self {
            writer,
            observables: observables.to_vec(),
            rows: 0,
        })
    }

    pub fn observables(&self) -> &[Observable] {
        &self.observables
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Evaluates every observable of `current` against `reference` and appends the row.
    pub fn append(
        &mut self,
        t: u64,
        cycle: usize,
        current: &Configuration,
        reference: &Configuration,
    ) -> Result<(), ObservableLogError> {
        let mut record = Vec::with_capacity(self.observables.len() + 2);
        record.push(t.to_string());
        record.push(cycle.to_string());
        record.extend(
            self.observables
                .iter()
                .map(|o| format_scientific(o.evaluate(current, reference))),
        );
        self.writer.write_record(&record)?;
        self.rows += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ObservableLogError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, ObservableLogError> {
        self.writer
            .into_inner()
            .map_err(|e| ObservableLogError::Io(e.into_error()))
    }
}
