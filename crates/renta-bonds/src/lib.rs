//! # Renta Bonds
//!
//! Instrument definitions and the data preparation steps that feed valuation:
//!
//! - **Instruments**: [`Instrument`] with its ordered [`CashflowEvent`] schedule
//! - **Cash Flows**: settlement filtering, discounting arrays, and the
//!   [`BondShape`] decision between zero-coupon and amortizing treatment
//! - **Indices**: [`IndexSeries`] coefficient lookup with forward
//!   extrapolation and the [`IndexRatio`] principal adjustment
//!
//! ## Example
//!
//! ```rust
//! use renta_bonds::prelude::*;
//! use renta_core::types::Date;
//!
//! let maturity = Date::from_ymd(2025, 1, 1).unwrap();
//! let issue = Date::from_ymd(2024, 1, 1).unwrap();
//! let flows = vec![CashflowEvent::new(maturity, 0.0, 100.0, 0.0, 100.0)];
//! let bond = Instrument::new("ZC25", issue, maturity, 0.0, flows);
//!
//! let settlement = Date::from_ymd(2024, 7, 1).unwrap();
//! let arrays = build_arrays(&bond.cashflows, settlement, 0.0, 0.0, 90.0);
//! assert_eq!(arrays.values, vec![-90.0, 100.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]

pub mod cashflows;
pub mod error;
pub mod indices;
pub mod instruments;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{
        build_arrays, remaining_events, BondShape, CashflowEvent, ScheduleArrays, ShapeKind,
    };
    pub use crate::error::{BondError, BondResult};
    pub use crate::indices::{ExtrapolationBasis, IndexRatio, IndexSample, IndexSeries};
    pub use crate::instruments::Instrument;
}

pub use error::{BondError, BondResult};
