//! Error types for analytics operations.

use renta_bonds::BondError;
use renta_math::MathError;
use thiserror::Error;

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for yield, risk, and valuation calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    // ========== Array Contract Errors ==========
    /// Values and dates have different lengths.
    #[error("values and dates must have the same length ({values} values, {dates} dates)")]
    ArrayLengthMismatch {
        /// Number of values.
        values: usize,
        /// Number of dates.
        dates: usize,
    },

    /// Cashflows without both a positive and a negative amount.
    #[error("cashflows must contain at least one positive and one negative value (min {min}, max {max})")]
    SignDegeneracy {
        /// Smallest value in the array.
        min: f64,
        /// Largest value in the array.
        max: f64,
    },

    // ========== Solver Errors ==========
    /// Newton-Raphson did not converge within the iteration cap.
    #[error("yield solver failed to converge after {iterations} iterations (residual: {residual:.2e})")]
    NonConvergence {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Math/solver error other than non-convergence.
    #[error("math error: {0}")]
    MathError(String),

    // ========== Division Errors ==========
    /// Division by a zero price, technical value, or 30/360 day count.
    #[error("division by zero in {context}")]
    ZeroPriceDivision {
        /// Which quantity was zero.
        context: String,
    },

    // ========== General Errors ==========
    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Error preparing the instrument (schedule, index series).
    #[error(transparent)]
    Bond(#[from] BondError),
}

impl AnalyticsError {
    /// Creates a zero division error.
    #[must_use]
    pub fn zero_division(context: impl Into<String>) -> Self {
        Self::ZeroPriceDivision {
            context: context.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => AnalyticsError::NonConvergence {
                iterations,
                residual,
            },
            other => AnalyticsError::MathError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::ArrayLengthMismatch {
            values: 3,
            dates: 2,
        };
        assert!(err.to_string().contains("3 values, 2 dates"));

        let err = AnalyticsError::zero_division("TNA price");
        assert_eq!(err.to_string(), "division by zero in TNA price");
    }

    #[test]
    fn test_convergence_maps_to_non_convergence() {
        let err: AnalyticsError = MathError::convergence_failed(30, 0.5).into();
        assert!(matches!(err, AnalyticsError::NonConvergence { iterations: 30, .. }));
    }

    #[test]
    fn test_bond_error_is_transparent() {
        let err: AnalyticsError = BondError::index_not_found("CER").into();
        assert_eq!(err.to_string(), "Index series 'CER' has no samples");
    }
}
