//! Index ratio between settlement and issue reference dates.

use serde::{Deserialize, Serialize};

use renta_core::calendars::Calendar;
use renta_core::types::Date;

use super::{ExtrapolationBasis, IndexSeries};
use crate::error::{BondError, BondResult};

/// Principal adjustment factor and the coefficients it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexRatio {
    /// `settlement_coefficient / issue_coefficient`, or 1 when unindexed.
    pub ratio: f64,
    /// Settlement shifted by the instrument offset.
    pub settlement_reference: Option<Date>,
    /// Issue date shifted by the instrument offset.
    pub issue_reference: Option<Date>,
    /// Coefficient at `settlement_reference`.
    pub settlement_coefficient: Option<f64>,
    /// Coefficient at `issue_reference`.
    pub issue_coefficient: Option<f64>,
}

impl IndexRatio {
    /// Ratio for instruments without an index.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            ratio: 1.0,
            settlement_reference: None,
            issue_reference: None,
            settlement_coefficient: None,
            issue_coefficient: None,
        }
    }

    /// Computes the ratio for an indexed instrument.
    ///
    /// Both dates are shifted by `offset` business days on `calendar` before
    /// the coefficient lookup.
    ///
    /// # Errors
    ///
    /// - lookup errors from [`IndexSeries::lookup_with`]
    /// - `BondError::InvalidCoefficient` if the issue coefficient is zero or not finite
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        series: &IndexSeries,
        calendar: &dyn Calendar,
        settlement: Date,
        issue_date: Date,
        offset: i32,
        annual_rate: f64,
        basis: ExtrapolationBasis,
    ) -> BondResult<Self> {
        let settlement_reference = calendar.add_business_days(settlement, offset);
        let issue_reference = calendar.add_business_days(issue_date, offset);

        let settlement_coefficient =
            series.lookup_with(settlement_reference, annual_rate, basis)?;
        let issue_coefficient = series.lookup_with(issue_reference, annual_rate, basis)?;

        if issue_coefficient == 0.0 || !issue_coefficient.is_finite() {
            return Err(BondError::InvalidCoefficient {
                index: series.name().to_string(),
                date: issue_reference.to_string(),
                value: issue_coefficient,
            });
        }

        Ok(Self {
            ratio: settlement_coefficient / issue_coefficient,
            settlement_reference: Some(settlement_reference),
            issue_reference: Some(issue_reference),
            settlement_coefficient: Some(settlement_coefficient),
            issue_coefficient: Some(issue_coefficient),
        })
    }
}

impl Default for IndexRatio {
    fn default() -> Self {
        Self::unit()
    }
}
