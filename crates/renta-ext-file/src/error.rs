//! Error types for file sources.

use std::path::PathBuf;

use renta_traits::TraitError;
use thiserror::Error;

/// Result type alias for file source operations.
pub type FileSourceResult<T> = Result<T, FileSourceError>;

/// Errors raised while reading or writing data files.
#[derive(Debug, Error)]
pub enum FileSourceError {
    /// File could not be opened or written.
    #[error("{path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Required header absent.
    #[error("{file}: missing required column '{column}'")]
    MissingColumn {
        /// Logical file name.
        file: &'static str,
        /// Column name.
        column: &'static str,
    },

    /// A row could not be parsed.
    #[error("{file} line {line}: {reason}")]
    InvalidRow {
        /// Logical file name.
        file: &'static str,
        /// 1-based line number including the header.
        line: u64,
        /// What was wrong.
        reason: String,
    },
}

impl FileSourceError {
    /// Creates an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid row error.
    pub fn invalid_row(file: &'static str, line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidRow {
            file,
            line,
            reason: reason.into(),
        }
    }
}

impl From<FileSourceError> for TraitError {
    fn from(e: FileSourceError) -> Self {
        match e {
            FileSourceError::Io { .. } => TraitError::IoError(e.to_string()),
            _ => TraitError::ParseError(e.to_string()),
        }
    }
}
