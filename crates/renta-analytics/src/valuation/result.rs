//! Valuation report.

use serde::{Deserialize, Serialize};

use renta_bonds::cashflows::ShapeKind;
use renta_bonds::indices::IndexRatio;
use renta_core::daycounts::DayCountConvention;
use renta_core::types::Date;

/// Full valuation report for one instrument at one settlement date.
///
/// `price` is always the market (index-adjusted) price, whether it was an
/// input or was solved for; `yield_rate` likewise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Instrument ticker.
    pub ticker: String,
    /// Settlement date.
    pub settlement: Date,
    /// Which valuation path was taken.
    pub shape: ShapeKind,
    /// Yield (effective annual for amortizing, simple for zero coupon).
    #[serde(rename = "yield")]
    pub yield_rate: f64,
    /// Market price per 100 nominal.
    pub price: f64,
    /// Modified duration in years.
    pub modified_duration: f64,
    /// Convexity.
    pub convexity: f64,
    /// Nominal annual rate.
    pub tna: f64,
    /// Calendar days since the last payment (or issue).
    pub accrued_days: i64,
    /// Coupon rate of the next unpaid period.
    pub current_coupon: f64,
    /// Outstanding principal per 100 nominal.
    pub residual: f64,
    /// Accrued interest, index-adjusted.
    pub accrued_interest: f64,
    /// Index-adjusted residual plus accrued interest.
    pub technical_value: f64,
    /// Price as a percentage of technical value.
    pub parity: f64,
    /// Date of the last payment before settlement.
    pub last_coupon: Option<Date>,
    /// Amortization paid on `last_coupon`.
    pub last_amortization: f64,
    /// Index coefficients used for the principal adjustment.
    pub index: IndexRatio,
    /// Instrument maturity.
    pub maturity: Date,
    /// Day count convention used for accrual and convexity.
    pub day_count: DayCountConvention,
}
