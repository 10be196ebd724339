//! # Renta Traits
//!
//! Trait definitions for the collaborators the valuation engine loads its
//! snapshots from.
//!
//! This crate contains ONLY trait definitions. Implementations live in
//! extension crates such as `renta-ext-file`.
//!
//! ## Module Structure
//!
//! - [`sources`]: instrument catalog and index series sources
//! - [`error`]: the shared [`TraitError`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod sources;

pub use error::TraitError;
pub use sources::{IndexSeriesSource, InstrumentSource};
