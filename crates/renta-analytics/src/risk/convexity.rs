//! Convexity with day-count time measurement.

use renta_bonds::cashflows::{build_arrays, CashflowEvent};
use renta_core::daycounts::DayCountConvention;
use renta_core::types::Date;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Convexity from discounting arrays.
///
/// `t_i` is the year fraction from `dates[0]` under `convention`:
///
/// ```text
/// C = Σ_{i≥1} v_i · t_i (t_i + 1) / (1 + y)^t_i  /  (P (1 + y)^2)
/// ```
///
/// # Errors
///
/// - `AnalyticsError::ArrayLengthMismatch` if the arrays differ in length
/// - `AnalyticsError::ZeroPriceDivision` if `price` is zero
pub fn convexity_from_arrays(
    values: &[f64],
    dates: &[Date],
    rate: f64,
    price: f64,
    convention: DayCountConvention,
) -> AnalyticsResult<f64> {
    if values.len() != dates.len() {
        return Err(AnalyticsError::ArrayLengthMismatch {
            values: values.len(),
            dates: dates.len(),
        });
    }
    if price == 0.0 {
        return Err(AnalyticsError::zero_division("convexity price"));
    }
    let Some(&settlement) = dates.first() else {
        return Ok(0.0);
    };

    let numerator: f64 = values
        .iter()
        .zip(dates)
        .skip(1)
        .map(|(v, d)| {
            let t = convention.year_fraction(settlement, *d);
            v * t * (t + 1.0) / (1.0 + rate).powf(t)
        })
        .sum();

    Ok(numerator / (price * (1.0 + rate).powi(2)))
}

/// Convexity of a schedule at `settlement`.
///
/// Builds price-zero arrays (ending fee applied to the last payment) and
/// delegates to [`convexity_from_arrays`].
///
/// # Errors
///
/// Returns `AnalyticsError::ZeroPriceDivision` if `price` is zero.
#[allow(clippy::too_many_arguments)]
pub fn convexity(
    events: &[CashflowEvent],
    rate: f64,
    settlement: Date,
    initial_fee: f64,
    ending_fee: f64,
    price: f64,
    convention: DayCountConvention,
) -> AnalyticsResult<f64> {
    let arrays = build_arrays(events, settlement, initial_fee, ending_fee, 0.0);
    convexity_from_arrays(&arrays.values, &arrays.dates, rate, price, convention)
}
