//! Risk metrics on the discounting arrays.
//!
//! - [`modified_duration`]: 365-day time basis, same as the yield solver
//! - [`convexity`]: time measured with the instrument's day count convention
//! - [`tna`]: nominal annual rate on a 30/360 basis
//!
//! The duration and convexity time bases differ on purpose; results match the
//! legacy report figures.

mod convexity;
mod duration;
mod tna;

pub use convexity::{convexity, convexity_from_arrays};
pub use duration::{modified_duration, payments_per_year};
pub use tna::tna;
