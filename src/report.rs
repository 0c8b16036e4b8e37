//! Per-round statistics written to disk as a CSV report, one row per round.

use std::ffi::OsStr;
use std::fs::{create_dir_all, File};
use std::path::Path;

use csv::Writer;

use crate::error::ContagionError;
use crate::log::trace;
use crate::stats::StatsRecord;

/// Writes [`StatsRecord`] rows to a CSV file. Each row is flushed as it is written so a report is
/// readable while a run is still in progress.
pub struct StatsReport {
    writer: Writer<File>,
}

// Checks that the path is valid. Creates the file and all parent directories if
// they do not exist. Returns the file if successful.
fn generate_validate_filepath(path: &Path) -> Result<File, ContagionError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("csv") => {
            if let Some(parent) = path.parent() {
                create_dir_all(parent)?;
            }
            let file = File::create(path)?;
            Ok(file)
        }
        _ => Err(ContagionError::ReportError(
            "Report output files must be CSVs at this time".to_string(),
        )),
    }
}

impl StatsReport {
    /// Opens the report file for writing.
    ///
    /// # Errors
    ///
    /// Returns a `ContagionError` when the path does not end in `.csv` or the file cannot be
    /// created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ContagionError> {
        let file = generate_validate_filepath(path.as_ref())?;
        Ok(StatsReport {
            writer: Writer::from_writer(file),
        })
    }

    /// Appends one round's statistics and flushes the row.
    ///
    /// # Errors
    ///
    /// Returns a `ContagionError` when serialization or the write fails.
    pub fn send(&mut self, record: &StatsRecord) -> Result<(), ContagionError> {
        trace!("Writing statistics for round {}", record.round);
        self.writer.serialize(record)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_and_read_back() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stats.csv");
        let mut report = StatsReport::new(&path).unwrap();
        report
            .send(&StatsRecord {
                round: 0,
                infected: 1,
                in_quarantine: 0,
                recovered: 0,
                dead: None,
            })
            .unwrap();
        report
            .send(&StatsRecord {
                round: 1,
                infected: 3,
                in_quarantine: 1,
                recovered: 0,
                dead: None,
            })
            .unwrap();

        assert!(path.exists(), "CSV file should exist");
        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<StatsRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].round, 0);
        assert_eq!(records[1].infected, 3);
    }

    #[test]
    fn directory_creation_writing_works() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("test-temp").join("stats.csv");
        let mut report = StatsReport::new(&path).unwrap();
        report
            .send(&StatsRecord {
                round: 0,
                infected: 1,
                in_quarantine: 0,
                recovered: 0,
                dead: Some(0),
            })
            .unwrap();
        assert!(path.exists(), "CSV file should exist");
    }

    #[test]
    fn only_csvs_allowed() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stats.tsv");
        let res = StatsReport::new(&path);
        match res {
            Ok(_) => panic!("Other file types beyond CSV are not allowed (yet)"),
            Err(ContagionError::ReportError(message)) => {
                assert!(message.contains("CSV"));
            }
            Err(other) => panic!("Unexpected error: {other}"),
        }
    }
}
