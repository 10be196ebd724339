//! Scheduled present value and internal rate of return.
//!
//! Discounting always uses a fixed 365-day year measured from the first date
//! in the array, whatever day count the instrument uses for accrual.
//!
//! ```rust
//! use renta_analytics::yields::{internal_rate_of_return, present_value, DEFAULT_GUESS};
//! use renta_core::types::Date;
//!
//! let dates = [
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2025, 1, 1).unwrap(),
//! ];
//! let values = [-100.0, 110.0];
//!
//! let rate = internal_rate_of_return(&values, &dates, DEFAULT_GUESS).unwrap();
//! assert!(present_value(rate, &values, &dates).unwrap().abs() < 1e-6);
//! ```

mod xnpv;

pub use xnpv::{
    internal_rate_of_return, internal_rate_of_return_with, present_value,
    present_value_derivative, year_offsets, DAYS_PER_YEAR, DEFAULT_GUESS,
};
