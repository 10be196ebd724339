//! Cashflow events and the settlement-date schedule preparation.
//!
//! - [`CashflowEvent`]: one row of an instrument's payment schedule
//! - [`build_arrays`]: discounting arrays anchored at the settlement date
//! - [`BondShape`]: zero-coupon vs amortizing decision, made once per valuation

mod event;
mod schedule;
mod shape;

pub use event::CashflowEvent;
pub use schedule::{build_arrays, first_retained, remaining_events, ScheduleArrays};
pub use shape::{BondShape, ShapeKind};
