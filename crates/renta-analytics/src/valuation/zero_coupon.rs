//! Closed forms for instruments with a single remaining cashflow.
//!
//! With one discounted payment `A` at year fraction `t` the pricing equation
//! is simple interest:
//!
//! ```text
//! P (1 + f_i) / ratio = A (1 - f_e) / (1 + r t)
//! ```

use crate::error::{AnalyticsError, AnalyticsResult};

fn check_year_fraction(year_fraction: f64) -> AnalyticsResult<()> {
    if year_fraction > 0.0 && year_fraction.is_finite() {
        Ok(())
    } else {
        Err(AnalyticsError::invalid_input(format!(
            "year fraction to maturity must be positive, got {year_fraction}"
        )))
    }
}

/// Simple-interest yield of a single payment `amount` bought at `price`.
///
/// # Errors
///
/// - `AnalyticsError::InvalidInput` if `year_fraction` is not positive
/// - `AnalyticsError::ZeroPriceDivision` if `price` or `ratio` is zero
pub fn zero_coupon_yield(
    amount: f64,
    price: f64,
    year_fraction: f64,
    initial_fee: f64,
    ending_fee: f64,
    ratio: f64,
) -> AnalyticsResult<f64> {
    check_year_fraction(year_fraction)?;
    if price == 0.0 || ratio == 0.0 {
        return Err(AnalyticsError::zero_division("zero coupon price"));
    }

    let cost = price * (1.0 + initial_fee) / ratio;
    Ok((amount * (1.0 - ending_fee) / cost - 1.0) / year_fraction)
}

/// Market price of a single payment `amount` at simple-interest `rate`.
///
/// Exact inverse of [`zero_coupon_yield`].
///
/// # Errors
///
/// - `AnalyticsError::InvalidInput` if `year_fraction` is not positive
/// - `AnalyticsError::ZeroPriceDivision` if `1 + rate * year_fraction` is zero
pub fn zero_coupon_price(
    amount: f64,
    rate: f64,
    year_fraction: f64,
    initial_fee: f64,
    ending_fee: f64,
    ratio: f64,
) -> AnalyticsResult<f64> {
    check_year_fraction(year_fraction)?;
    let growth = 1.0 + rate * year_fraction;
    if growth == 0.0 {
        return Err(AnalyticsError::zero_division("zero coupon discount factor"));
    }

    Ok(amount * (1.0 - ending_fee) * ratio / (growth * (1.0 + initial_fee)))
}
