//! Error types for bond operations.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while preparing an instrument for valuation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid instrument specification.
    #[error("Invalid bond specification for {ticker}: {reason}")]
    InvalidSpec {
        /// Instrument ticker.
        ticker: String,
        /// Description of what's invalid.
        reason: String,
    },

    /// Settlement date is after the last cashflow.
    #[error("Settlement date {settlement} is after the last cashflow {maturity}")]
    SettlementAfterMaturity {
        /// Settlement date.
        settlement: String,
        /// Date of the last scheduled cashflow.
        maturity: String,
    },

    /// Coefficient lookup on a series without samples.
    #[error("Index series '{index}' has no samples")]
    IndexNotFound {
        /// Name of the index series.
        index: String,
    },

    /// Index coefficient cannot be used as a divisor.
    #[error("Index '{index}' coefficient at {date} is {value}")]
    InvalidCoefficient {
        /// Name of the index series.
        index: String,
        /// Reference date of the coefficient.
        date: String,
        /// The offending coefficient.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    CoreError(#[from] renta_core::CoreError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }

    /// Creates an index not found error.
    #[must_use]
    pub fn index_not_found(index: impl Into<String>) -> Self {
        Self::IndexNotFound {
            index: index.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
