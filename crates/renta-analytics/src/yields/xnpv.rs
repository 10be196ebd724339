//! XNPV / XIRR style calculations over irregularly dated cashflows.

use renta_core::types::Date;
use renta_math::solvers::{newton_raphson, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Year basis used for discounting exponents.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Starting rate for the yield solver.
pub const DEFAULT_GUESS: f64 = 0.0001;

fn check_lengths(values: &[f64], dates: &[Date]) -> AnalyticsResult<()> {
    if values.len() == dates.len() {
        Ok(())
    } else {
        Err(AnalyticsError::ArrayLengthMismatch {
            values: values.len(),
            dates: dates.len(),
        })
    }
}

/// Years from `dates[0]` to each date on a 365-day basis.
pub fn year_offsets(dates: &[Date]) -> Vec<f64> {
    let Some(first) = dates.first() else {
        return Vec::new();
    };
    dates
        .iter()
        .map(|d| first.days_between(d) as f64 / DAYS_PER_YEAR)
        .collect()
}

/// Net present value at `dates[0]`: `Σ v_i / (1 + rate)^t_i`.
///
/// # Errors
///
/// Returns `AnalyticsError::ArrayLengthMismatch` if the arrays differ in length.
pub fn present_value(rate: f64, values: &[f64], dates: &[Date]) -> AnalyticsResult<f64> {
    check_lengths(values, dates)?;
    Ok(npv(rate, values, &year_offsets(dates)))
}

/// Derivative of [`present_value`] with respect to the rate:
/// `Σ -v_i t_i / (1 + rate)^(t_i + 1)`.
///
/// # Errors
///
/// Returns `AnalyticsError::ArrayLengthMismatch` if the arrays differ in length.
pub fn present_value_derivative(
    rate: f64,
    values: &[f64],
    dates: &[Date],
) -> AnalyticsResult<f64> {
    check_lengths(values, dates)?;
    Ok(npv_derivative(rate, values, &year_offsets(dates)))
}

/// Rate at which the scheduled cashflows have zero present value.
///
/// Uses the default solver settings: step tolerance 1e-6, 30 iterations.
///
/// # Errors
///
/// - `AnalyticsError::ArrayLengthMismatch` if the arrays differ in length
/// - `AnalyticsError::SignDegeneracy` if there is no strictly positive and
///   strictly negative value (checked before iterating)
/// - `AnalyticsError::NonConvergence` if the iteration cap is reached
pub fn internal_rate_of_return(
    values: &[f64],
    dates: &[Date],
    guess: f64,
) -> AnalyticsResult<f64> {
    internal_rate_of_return_with(values, dates, guess, &SolverConfig::default())
}

/// [`internal_rate_of_return`] with explicit solver settings.
pub fn internal_rate_of_return_with(
    values: &[f64],
    dates: &[Date],
    guess: f64,
    config: &SolverConfig,
) -> AnalyticsResult<f64> {
    check_lengths(values, dates)?;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(min < 0.0 && max > 0.0) {
        return Err(AnalyticsError::SignDegeneracy { min, max });
    }

    let times = year_offsets(dates);
    let result = newton_raphson(
        |r| npv(r, values, &times),
        |r| npv_derivative(r, values, &times),
        guess,
        config,
    )?;

    Ok(result.root)
}

fn npv(rate: f64, values: &[f64], times: &[f64]) -> f64 {
    values
        .iter()
        .zip(times)
        .map(|(v, t)| v / (1.0 + rate).powf(*t))
        .sum()
}

fn npv_derivative(rate: f64, values: &[f64], times: &[f64]) -> f64 {
    values
        .iter()
        .zip(times)
        .map(|(v, t)| -v * t / (1.0 + rate).powf(t + 1.0))
        .sum()
}
