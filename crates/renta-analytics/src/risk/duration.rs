//! Modified duration with a schedule-inferred compounding frequency.
//!
//! ## Formula
//!
//! ```text
//! D_mod = (Σ t_i · v_i / (1 + y)^t_i) / P / (1 + y / n)
//! ```
//!
//! where `t_i` is measured in 365-day years from settlement and `n` is the
//! largest number of payments falling in one calendar year.

use std::collections::HashMap;

use renta_core::types::Date;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::yields::year_offsets;

/// Maximum number of payment dates (anchor excluded) in any calendar year.
pub fn payments_per_year(dates: &[Date]) -> usize {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for date in dates.iter().skip(1) {
        *counts.entry(date.year()).or_default() += 1;
    }
    counts.into_values().max().unwrap_or(0)
}

/// Modified duration of the arrays at `rate` for a given price.
///
/// `values[0]` is the anchor and contributes nothing (its time is zero).
///
/// # Errors
///
/// - `AnalyticsError::ArrayLengthMismatch` if the arrays differ in length
/// - `AnalyticsError::ZeroPriceDivision` if `price` is zero
/// - `AnalyticsError::InvalidInput` if there are no payments after the anchor
pub fn modified_duration(
    values: &[f64],
    dates: &[Date],
    rate: f64,
    price: f64,
) -> AnalyticsResult<f64> {
    if values.len() != dates.len() {
        return Err(AnalyticsError::ArrayLengthMismatch {
            values: values.len(),
            dates: dates.len(),
        });
    }
    if price == 0.0 {
        return Err(AnalyticsError::zero_division("duration price"));
    }

    let frequency = payments_per_year(dates);
    if frequency == 0 {
        return Err(AnalyticsError::invalid_input(
            "duration needs at least one payment after settlement",
        ));
    }

    let weighted: f64 = values
        .iter()
        .zip(year_offsets(dates))
        .map(|(v, t)| v / (1.0 + rate).powf(t) * t)
        .sum();

    Ok(weighted / price / (1.0 + rate / frequency as f64))
}
