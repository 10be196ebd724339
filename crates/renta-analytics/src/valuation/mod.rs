//! Valuation reports.
//!
//! [`Valuator`] turns an [`Instrument`](renta_bonds::instruments::Instrument)
//! plus a [`ValuationRequest`] into a [`ValuationResult`]. The remaining
//! schedule is classified once into a
//! [`BondShape`](renta_bonds::cashflows::BondShape); single-cashflow
//! instruments use the closed forms in [`zero_coupon_yield`] and
//! [`zero_coupon_price`], the rest go through the XIRR solver.

mod request;
mod result;
mod valuator;
mod zero_coupon;

pub use request::{Quote, ValuationRequest};
pub use result::ValuationResult;
pub use valuator::Valuator;
pub use zero_coupon::{zero_coupon_price, zero_coupon_yield};
