//! Index coefficient series and principal adjustment.
//!
//! Inflation-linked instruments adjust principal by the ratio of the index
//! coefficient at settlement to the coefficient at issue. Both reference
//! dates are shifted by the instrument's business-day offset first.

mod ratio;
mod series;

pub use ratio::IndexRatio;
pub use series::{ExtrapolationBasis, IndexSample, IndexSeries};
