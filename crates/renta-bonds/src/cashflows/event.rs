//! A single scheduled payment.

use serde::{Deserialize, Serialize};

use renta_core::types::Date;

/// One payment in an instrument's schedule.
///
/// Amounts are per 100 of original face value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashflowEvent {
    /// Payment date.
    pub date: Date,
    /// Coupon rate applicable to the period ending on this date.
    pub rate: f64,
    /// Principal repaid on this date.
    #[serde(alias = "amort")]
    pub amortization: f64,
    /// Principal outstanding after this payment.
    pub residual: f64,
    /// Total cash paid on this date (interest plus amortization).
    pub amount: f64,
}

impl CashflowEvent {
    /// Creates a new cashflow event.
    #[must_use]
    pub fn new(date: Date, rate: f64, amortization: f64, residual: f64, amount: f64) -> Self {
        Self {
            date,
            rate,
            amortization,
            residual,
            amount,
        }
    }

    /// Principal outstanding before this payment.
    #[must_use]
    pub fn residual_before(&self) -> f64 {
        self.residual + self.amortization
    }
}
