//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid fee.
    #[error("Invalid {name}: {value}. Must be in [0, 1).")]
    InvalidFee {
        /// Flag name.
        name: &'static str,
        /// Value given.
        value: f64,
    },

    /// Invalid price.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// Missing data file.
    #[error("Missing data file: {0}. Set it in the config [data] section or pass --{0}.")]
    MissingData(&'static str),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
