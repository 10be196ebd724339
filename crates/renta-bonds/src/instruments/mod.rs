//! Instrument definitions.
//!
//! An [`Instrument`] is loaded once from a source and then only read.
//! Validation happens at load time through [`Instrument::validate`].

use serde::{Deserialize, Serialize};

use renta_core::daycounts::DayCountConvention;
use renta_core::types::Date;

use crate::cashflows::CashflowEvent;
use crate::error::{BondError, BondResult};

/// Tolerance allowed when checking that residual principal never increases.
pub const RESIDUAL_TOLERANCE: f64 = 1e-9;

/// A bond with an explicit payment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Stable identifier.
    #[serde(default)]
    pub id: String,
    /// Exchange ticker (upper case).
    pub ticker: String,
    /// Issue date.
    pub issue_date: Date,
    /// Maturity date.
    pub maturity: Date,
    /// Nominal coupon rate (decimal, e.g. 0.05).
    pub coupon: f64,
    /// Payment schedule ordered by date.
    pub cashflows: Vec<CashflowEvent>,
    /// Index series used to adjust principal, if any.
    #[serde(default)]
    pub index: Option<String>,
    /// Business-day lookback applied to index reference dates.
    #[serde(default)]
    pub offset: i32,
    /// Day count convention (serialized as its integer tag).
    #[serde(default)]
    pub day_count: DayCountConvention,
}

impl Instrument {
    /// Creates an unindexed 30/360 instrument. The ticker is upper-cased and
    /// doubles as the identifier until [`with_id`](Self::with_id) is called.
    #[must_use]
    pub fn new(
        ticker: impl Into<String>,
        issue_date: Date,
        maturity: Date,
        coupon: f64,
        cashflows: Vec<CashflowEvent>,
    ) -> Self {
        let ticker = ticker.into().trim().to_uppercase();
        Self {
            id: ticker.clone(),
            ticker,
            issue_date,
            maturity,
            coupon,
            cashflows,
            index: None,
            offset: 0,
            day_count: DayCountConvention::default(),
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Links the instrument to an index series with a business-day offset.
    #[must_use]
    pub fn with_index(mut self, index: impl Into<String>, offset: i32) -> Self {
        let index = index.into();
        self.index = if index.trim().is_empty() {
            None
        } else {
            Some(index)
        };
        self.offset = offset;
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Returns true if principal is adjusted by an index series.
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Checks the schedule invariants.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSpec` if the maturity precedes issue, the
    /// schedule is empty, dates go backwards, or residual principal grows by
    /// more than [`RESIDUAL_TOLERANCE`].
    pub fn validate(&self) -> BondResult<()> {
        if self.ticker.is_empty() {
            return Err(BondError::invalid_spec("<blank>", "ticker is empty"));
        }
        if self.maturity < self.issue_date {
            return Err(BondError::invalid_spec(
                &self.ticker,
                format!(
                    "maturity {} is before issue date {}",
                    self.maturity, self.issue_date
                ),
            ));
        }
        if self.cashflows.is_empty() {
            return Err(BondError::invalid_spec(&self.ticker, "no cashflows"));
        }

        for (i, pair) in self.cashflows.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.date < prev.date {
                return Err(BondError::invalid_spec(
                    &self.ticker,
                    format!(
                        "cashflow {} dated {} precedes cashflow {} dated {}",
                        i + 2,
                        next.date,
                        i + 1,
                        prev.date
                    ),
                ));
            }
            if next.residual > prev.residual + RESIDUAL_TOLERANCE {
                return Err(BondError::invalid_spec(
                    &self.ticker,
                    format!(
                        "residual increases from {} to {} at {}",
                        prev.residual, next.residual, next.date
                    ),
                ));
            }
        }

        Ok(())
    }
}
