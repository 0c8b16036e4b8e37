use std::fmt::{self, Debug, Display};
use std::io;

/// Provides `ContagionError` and conversions from other error types.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ContagionError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    CSVError(csv::Error),
    /// A population size that cannot seed a simulation (zero).
    InvalidSize(String),
    /// A configuration value outside its documented range.
    InvalidParameter(String),
    /// A round update was requested for a population with no agents.
    EmptyPopulation,
    ReportError(String),
}

impl From<io::Error> for ContagionError {
    fn from(error: io::Error) -> Self {
        ContagionError::IoError(error)
    }
}

impl From<serde_json::Error> for ContagionError {
    fn from(error: serde_json::Error) -> Self {
        ContagionError::JsonError(error)
    }
}

impl From<csv::Error> for ContagionError {
    fn from(error: csv::Error) -> Self {
        ContagionError::CSVError(error)
    }
}

impl std::error::Error for ContagionError {}

impl Display for ContagionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {self:?}")?;
        Ok(())
    }
}
