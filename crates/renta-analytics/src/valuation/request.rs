//! Valuation request parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use renta_core::types::Date;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Market input for a valuation: either a price or a rate, never both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quote {
    /// Market (index-adjusted) price per 100 nominal; solve for the yield.
    Price(f64),
    /// Effective annual rate; solve for the price.
    Rate(f64),
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::Price(p) => write!(f, "price {p}"),
            Quote::Rate(r) => write!(f, "rate {r}"),
        }
    }
}

/// A single valuation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRequest {
    /// Instrument ticker.
    pub ticker: String,
    /// Settlement date.
    pub settlement: Date,
    /// Price or rate.
    pub quote: Quote,
    /// Fee paid on entry, as a fraction of price.
    #[serde(default)]
    pub initial_fee: f64,
    /// Fee withheld from the final payment, as a fraction.
    #[serde(default)]
    pub ending_fee: f64,
    /// Annual rate for index extrapolation past the last known sample.
    #[serde(default)]
    pub extend_rate: f64,
}

impl ValuationRequest {
    /// Creates a request.
    pub fn new(ticker: impl Into<String>, settlement: Date, quote: Quote) -> Self {
        Self {
            ticker: ticker.into().trim().to_uppercase(),
            settlement,
            quote,
            initial_fee: 0.0,
            ending_fee: 0.0,
            extend_rate: 0.0,
        }
    }

    /// Yield-from-price request.
    pub fn from_price(ticker: impl Into<String>, settlement: Date, price: f64) -> Self {
        Self::new(ticker, settlement, Quote::Price(price))
    }

    /// Price-from-rate request.
    pub fn from_rate(ticker: impl Into<String>, settlement: Date, rate: f64) -> Self {
        Self::new(ticker, settlement, Quote::Rate(rate))
    }

    /// Sets entry and exit fees.
    #[must_use]
    pub fn with_fees(mut self, initial_fee: f64, ending_fee: f64) -> Self {
        self.initial_fee = initial_fee;
        self.ending_fee = ending_fee;
        self
    }

    /// Sets the index extrapolation rate.
    #[must_use]
    pub fn with_extend_rate(mut self, extend_rate: f64) -> Self {
        self.extend_rate = extend_rate;
        self
    }

    /// Checks the numeric parameters.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidInput` when a fee is outside `[0, 1)`,
    /// the price is not positive, the rate is not above -100%, the extension
    /// rate is negative, or any value is not finite.
    pub fn validate(&self) -> AnalyticsResult<()> {
        for (name, fee) in [
            ("initial fee", self.initial_fee),
            ("ending fee", self.ending_fee),
        ] {
            if !fee.is_finite() || !(0.0..1.0).contains(&fee) {
                return Err(AnalyticsError::invalid_input(format!(
                    "{name} must be in [0, 1), got {fee}"
                )));
            }
        }

        if !self.extend_rate.is_finite() || self.extend_rate < 0.0 {
            return Err(AnalyticsError::invalid_input(format!(
                "extension rate must be >= 0, got {}",
                self.extend_rate
            )));
        }

        match self.quote {
            Quote::Price(p) if !p.is_finite() || p <= 0.0 => Err(AnalyticsError::invalid_input(
                format!("price must be positive, got {p}"),
            )),
            Quote::Rate(r) if !r.is_finite() || r <= -1.0 => Err(AnalyticsError::invalid_input(
                format!("rate must be greater than -1, got {r}"),
            )),
            _ => Ok(()),
        }
    }
}
