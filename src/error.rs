use std::path::Path;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Failures a page can hit while turning source files into rendered tables.
///
/// All variants carry owned strings so a failed load can be cached and shown
/// again on the next frame without touching the disk.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("Data unavailable ({what}): {reason}")]
    DataUnavailable { what: String, reason: String },

    #[error("Column '{column}': cannot parse '{value}' as a number")]
    Parse { column: String, value: String },

    #[error("{0}")]
    Validation(String),
}

impl TrackerError {
    pub fn unavailable(what: impl Into<String>, reason: impl ToString) -> Self {
        TrackerError::DataUnavailable {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    pub fn file_unavailable(path: &Path, reason: impl ToString) -> Self {
        Self::unavailable(path.display().to_string(), reason)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        TrackerError::Validation(message.into())
    }
}
