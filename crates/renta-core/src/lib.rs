//! # Renta Core
//!
//! Core types and conventions for the Renta fixed-income valuation engine.
//!
//! - **Types**: the [`Date`] newtype used by every other crate
//! - **Day Count Conventions**: the four conventions an instrument can be
//!   tagged with (30/360, ACT/365, ACT/ACT, ACT/360)
//! - **Calendars**: the business-day shift oracle used to align index
//!   reference dates
//!
//! ## Example
//!
//! ```rust
//! use renta_core::prelude::*;
//!
//! let start = Date::from_ymd(2024, 1, 31).unwrap();
//! let end = Date::from_ymd(2024, 3, 31).unwrap();
//!
//! let yf = DayCountConvention::Thirty360.year_fraction(start, end);
//! assert!((yf - 60.0 / 360.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, HolidayCalendar, WeekendCalendar};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::Date;
