//! Ordered coefficient series with exact lookup and tail extrapolation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use renta_core::types::Date;

use crate::error::{BondError, BondResult};

/// A single published coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexSample {
    /// Publication date.
    pub date: Date,
    /// Coefficient value.
    pub value: f64,
}

impl IndexSample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(date: Date, value: f64) -> Self {
        Self { date, value }
    }
}

/// Compounding rule used when extrapolating past the last sample.
///
/// Both rules grow the last coefficient by `days / 365` years:
///
/// - `Effective`: `last * (1 + rate)^(days/365)`
/// - `Legacy`: `last * (1 + rate/365)^(days/365)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtrapolationBasis {
    /// Annual rate treated as an effective annual growth rate.
    #[default]
    Effective,
    /// Annual rate divided by 365 before compounding.
    Legacy,
}

impl ExtrapolationBasis {
    fn growth(self, annual_rate: f64, days: i64) -> f64 {
        let years = days as f64 / 365.0;
        match self {
            ExtrapolationBasis::Effective => (1.0 + annual_rate).powf(years),
            ExtrapolationBasis::Legacy => (1.0 + annual_rate / 365.0).powf(years),
        }
    }
}

impl fmt::Display for ExtrapolationBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtrapolationBasis::Effective => write!(f, "effective"),
            ExtrapolationBasis::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for ExtrapolationBasis {
    type Err = BondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "effective" => Ok(ExtrapolationBasis::Effective),
            "legacy" => Ok(ExtrapolationBasis::Legacy),
            other => Err(BondError::invalid_input(format!(
                "unknown extrapolation basis '{other}'"
            ))),
        }
    }
}

/// Coefficient series, ascending by date.
///
/// Lookups scan from the newest sample backward for an exact date match.
/// Dates without a sample are extrapolated from the last sample; gaps inside
/// the series are never interpolated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexSeries {
    name: String,
    samples: Vec<IndexSample>,
}

impl IndexSeries {
    /// Creates a series. Samples are sorted by date; for duplicate dates the
    /// one supplied last wins.
    pub fn new(name: impl Into<String>, samples: impl IntoIterator<Item = IndexSample>) -> Self {
        let mut samples: Vec<IndexSample> = samples.into_iter().collect();
        samples.reverse();
        // stable sort keeps the later duplicate first, dedup keeps the first
        samples.sort_by_key(|s| s.date);
        samples.dedup_by_key(|s| s.date);
        Self {
            name: name.into(),
            samples,
        }
    }

    /// Creates an empty series.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            samples: Vec::new(),
        }
    }

    /// Series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Samples in ascending date order.
    pub fn samples(&self) -> &[IndexSample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample.
    pub fn last(&self) -> Option<&IndexSample> {
        self.samples.last()
    }

    /// Exact-date sample, scanning newest first.
    pub fn exact(&self, date: Date) -> Option<&IndexSample> {
        self.samples.iter().rev().find(|s| s.date == date)
    }

    /// Coefficient at `date` using the default [`ExtrapolationBasis`].
    ///
    /// # Errors
    ///
    /// See [`lookup_with`](Self::lookup_with).
    pub fn lookup(&self, date: Date, annual_rate: f64) -> BondResult<f64> {
        self.lookup_with(date, annual_rate, ExtrapolationBasis::default())
    }

    /// Coefficient at `date`: exact sample if present, otherwise the last
    /// sample grown at `annual_rate` for the days between them.
    ///
    /// # Errors
    ///
    /// - `BondError::IndexNotFound` if the series is empty
    /// - `BondError::InvalidInput` if `annual_rate` is negative or not finite
    pub fn lookup_with(
        &self,
        date: Date,
        annual_rate: f64,
        basis: ExtrapolationBasis,
    ) -> BondResult<f64> {
        if !annual_rate.is_finite() || annual_rate < 0.0 {
            return Err(BondError::invalid_input(format!(
                "extrapolation rate must be >= 0, got {annual_rate}"
            )));
        }

        let last = self
            .last()
            .ok_or_else(|| BondError::index_not_found(&self.name))?;

        if let Some(sample) = self.exact(date) {
            return Ok(sample.value);
        }

        let days = last.date.days_between(&date);
        log::debug!(
            "index {} has no sample at {date}, extrapolating {days} days from {}",
            self.name,
            last.date
        );
        Ok(last.value * basis.growth(annual_rate, days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn series() -> IndexSeries {
        IndexSeries::new(
            "CER",
            [
                IndexSample::new(date(2024, 1, 3), 101.0),
                IndexSample::new(date(2024, 1, 1), 100.0),
                IndexSample::new(date(2024, 1, 2), 100.5),
            ],
        )
    }

    #[test]
    fn test_samples_sorted() {
        let s = series();
        let dates: Vec<_> = s.samples().iter().map(|x| x.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);
    }

    #[test]
    fn test_duplicate_keeps_latest_supplied() {
        let s = IndexSeries::new(
            "CER",
            [
                IndexSample::new(date(2024, 1, 1), 100.0),
                IndexSample::new(date(2024, 1, 1), 100.7),
            ],
        );
        assert_eq!(s.len(), 1);
        assert_eq!(s.lookup(date(2024, 1, 1), 0.0).unwrap(), 100.7);
    }

    #[test]
    fn test_exact_match() {
        let s = series();
        assert_eq!(s.lookup(date(2024, 1, 2), 0.5).unwrap(), 100.5);
    }

    #[test]
    fn test_extrapolation_one_year_at_ten_percent() {
        let s = IndexSeries::new("CER", [IndexSample::new(date(2024, 1, 1), 100.0)]);
        let value = s.lookup(date(2024, 1, 1).add_days(365), 0.10).unwrap();
        assert_relative_eq!(value, 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_legacy_extrapolation() {
        let s = IndexSeries::new("CER", [IndexSample::new(date(2024, 1, 1), 100.0)]);
        let value = s
            .lookup_with(date(2024, 1, 1).add_days(365), 0.10, ExtrapolationBasis::Legacy)
            .unwrap();
        assert_relative_eq!(value, 100.0 * (1.0 + 0.10 / 365.0), epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_extrapolation_is_flat() {
        let s = series();
        assert_eq!(s.lookup(date(2030, 1, 1), 0.0).unwrap(), 101.0);
    }

    #[test]
    fn test_gap_uses_tail_not_interpolation() {
        let s = IndexSeries::new(
            "CER",
            [
                IndexSample::new(date(2024, 1, 1), 100.0),
                IndexSample::new(date(2024, 1, 10), 110.0),
            ],
        );
        let value = s.lookup(date(2024, 1, 5), 0.0).unwrap();
        assert_eq!(value, 110.0);
    }

    #[test]
    fn test_empty_series_errors() {
        let s = IndexSeries::empty("CER");
        let err = s.lookup(date(2024, 1, 1), 0.0).unwrap_err();
        assert_eq!(err, BondError::index_not_found("CER"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let s = series();
        assert!(matches!(
            s.lookup(date(2025, 1, 1), -0.01),
            Err(BondError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_basis_parsing() {
        assert_eq!("Legacy".parse::<ExtrapolationBasis>().unwrap(), ExtrapolationBasis::Legacy);
        assert_eq!(ExtrapolationBasis::default().to_string(), "effective");
        assert!("monthly".parse::<ExtrapolationBasis>().is_err());
    }

    proptest! {
        #[test]
        fn prop_extrapolation_grows_with_days(
            rate in 0.0f64..2.0,
            near in 1i64..3_000,
            extra in 0i64..3_000,
            legacy in any::<bool>(),
        ) {
            let s = series();
            let basis = if legacy {
                ExtrapolationBasis::Legacy
            } else {
                ExtrapolationBasis::Effective
            };
            let last = date(2024, 1, 3);

            let earlier = s.lookup_with(last.add_days(near), rate, basis).unwrap();
            let later = s.lookup_with(last.add_days(near + extra), rate, basis).unwrap();

            prop_assert!(earlier >= 101.0);
            prop_assert!(later >= earlier);
        }
    }
}
