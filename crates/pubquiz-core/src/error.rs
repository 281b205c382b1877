//! Dataset error types.
//!
//! Broken individual rows are skipped with a warning at load time; these
//! errors cover the cases where the dataset as a whole is unusable, so the
//! CLI can report them without string matching.

use thiserror::Error;

/// Errors that make a question dataset unusable.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV structure could not be parsed at all.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required header column is missing.
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

impl DatasetError {
    /// Returns `true` if the file was readable and only its contents need
    /// fixing.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            DatasetError::Csv(_) | DatasetError::MissingColumn(_)
        )
    }
}
