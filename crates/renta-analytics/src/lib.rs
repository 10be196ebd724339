//! # Renta Analytics
//!
//! Yield, price and risk calculations for scheduled bonds.
//!
//! - **Yields**: XNPV, its derivative, and the Newton-driven XIRR
//! - **Risk**: modified duration, convexity, nominal annual rate (TNA)
//! - **Valuation**: the full report (accrued interest, technical value,
//!   parity) with a closed-form path for single-cashflow instruments
//!
//! ## Architecture
//!
//! `renta-analytics` depends on `renta-bonds` for instrument and schedule
//! types; `renta-bonds` does not depend on this crate.
//!
//! ## Usage
//!
//! ```rust
//! use renta_analytics::prelude::*;
//! use renta_bonds::prelude::*;
//! use renta_core::prelude::*;
//!
//! let d = |y, m, day| Date::from_ymd(y, m, day).unwrap();
//! let flows = vec![CashflowEvent::new(d(2025, 1, 1), 0.0, 100.0, 0.0, 100.0)];
//! let bond = Instrument::new("ZC25", d(2024, 1, 1), d(2025, 1, 1), 0.0, flows);
//!
//! let calendar = WeekendCalendar;
//! let valuator = Valuator::new(&calendar);
//! let request = ValuationRequest::from_price("ZC25", d(2024, 7, 1), 90.0);
//! let result = valuator.value(&bond, &request).unwrap();
//!
//! assert_eq!(result.shape, ShapeKind::ZeroCoupon);
//! assert!(result.yield_rate > 0.2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod risk;
pub mod valuation;
pub mod yields;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::risk::{convexity, convexity_from_arrays, modified_duration, payments_per_year, tna};
    pub use crate::valuation::{
        zero_coupon_price, zero_coupon_yield, Quote, ValuationRequest, ValuationResult, Valuator,
    };
    pub use crate::yields::{
        internal_rate_of_return, internal_rate_of_return_with, present_value,
        present_value_derivative,
    };
}
