//! # Renta Ext File
//!
//! File-based collaborators for the Renta valuation engine.
//!
//! This crate provides:
//! - CSV instrument catalog (`bonds.csv` + `cashflows.csv`) with upload-style
//!   validation and a [`LoadSummary`]
//! - JSON instrument seed
//! - CSV index coefficient series (`date,value`)
//! - CSV holiday calendar (`date`)
//! - Schedule export in the same two-file CSV layout

#![warn(missing_docs)]
#![warn(clippy::all)]

mod catalog;
mod error;
mod export;
mod holidays;
mod index;
mod reader;

pub use catalog::*;
pub use error::{FileSourceError, FileSourceResult};
pub use export::*;
pub use holidays::*;
pub use index::*;

use std::path::Path;

/// Creates the CSV catalog and index sources from their file paths.
pub fn create_file_sources(
    bonds_csv: impl AsRef<Path>,
    cashflows_csv: impl AsRef<Path>,
    index_csv: impl AsRef<Path>,
) -> (CsvInstrumentSource, CsvIndexSeriesSource) {
    (
        CsvInstrumentSource::new(bonds_csv, cashflows_csv),
        CsvIndexSeriesSource::new(index_csv),
    )
}
