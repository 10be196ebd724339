//! Engine error types.

use renta_analytics::AnalyticsError;
use renta_core::daycounts::DayCountConvention;
use renta_core::types::Date;
use renta_traits::TraitError;
use thiserror::Error;

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Ticker not in the current catalog
    #[error("instrument not found: {ticker}")]
    InstrumentNotFound {
        /// Requested ticker.
        ticker: String,
    },

    /// Valuation failed
    #[error("valuation of {ticker} at {settlement} ({convention}) failed: {source}")]
    Valuation {
        /// Instrument ticker.
        ticker: String,
        /// Settlement date of the request.
        settlement: Date,
        /// Instrument day count convention.
        convention: DayCountConvention,
        /// Underlying failure.
        #[source]
        source: AnalyticsError,
    },

    /// Snapshot reload failed
    #[error("{snapshot} reload failed after {attempts} attempt(s): {reason}")]
    Reload {
        /// Which snapshot (`catalog` or `index`).
        snapshot: &'static str,
        /// Attempts made.
        attempts: u32,
        /// Last failure.
        reason: String,
    },

    /// Source error
    #[error("source error: {0}")]
    Source(#[from] TraitError),
}

impl EngineError {
    /// Creates an instrument-not-found error.
    pub fn not_found(ticker: impl Into<String>) -> Self {
        Self::InstrumentNotFound {
            ticker: ticker.into(),
        }
    }

    /// True when the underlying cause is bad request input rather than a
    /// missing instrument or a numerical failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EngineError::Valuation {
                source: AnalyticsError::InvalidInput(_),
                ..
            }
        )
    }
}
